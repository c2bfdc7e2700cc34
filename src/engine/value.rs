use crate::{ast::LiteralValue, util::num::whole_real_to_i64};

/// Represents a runtime value bound to a variable or produced by evaluation.
///
/// This enum models the three shapes an input token or expression result can
/// take. Numeric tokens become `Integer` or `Real`; tokens that parse as
/// neither are retained verbatim as `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A raw input token that did not parse as a number.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
        }
    }
}

impl Value {
    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is numeric, either [`Integer`] or
    /// [`Real`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Real`]: Value::Real
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }
}

/// Prints the value the way it appears in program output.
///
/// Whole-valued reals print in integer form, so `8 / 2` renders as `4`
/// rather than `4.0`. All other reals use their natural decimal
/// representation.
///
/// # Example
/// ```
/// use minirun::engine::value::Value;
///
/// assert_eq!(Value::Real(4.0).to_string(), "4");
/// assert_eq!(Value::Real(3.5).to_string(), "3.5");
/// assert_eq!(Value::Integer(-7).to_string(), "-7");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => match whole_real_to_i64(*r) {
                Some(n) => write!(f, "{n}"),
                None => write!(f, "{r}"),
            },
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
