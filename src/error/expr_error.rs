#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating one
/// write-expression.
///
/// Unlike [`ExecError`], these never abort the run: the engine degrades the
/// failing expression to an inline `Error: ...` output line and keeps going,
/// so partial output stays useful.
///
/// [`ExecError`]: crate::error::ExecError
pub enum ExprError {
    /// Found a token the expression grammar does not recognize.
    UnexpectedToken {
        /// The offending token text.
        token: String,
    },
    /// Reached the end of the expression unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// Tried to use a variable no read-statement has bound.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to use a variable whose bound value is not numeric.
    NonNumericVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "unexpected token '{token}' in expression")
            },
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of expression"),
            Self::ExpectedClosingParen => {
                write!(f, "expected closing parenthesis ')'")
            },
            Self::TrailingTokens { token } => {
                write!(f, "extra tokens after expression: {token}")
            },
            Self::UnknownVariable { name } => write!(f, "name '{name}' is not defined"),
            Self::NonNumericVariable { name } => {
                write!(f, "variable '{name}' is not numeric")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for ExprError {}
