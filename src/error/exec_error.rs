use crate::engine::classify::Archetype;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that abort a whole engine run.
///
/// Every variant is recoverable from the caller's point of view: the engine
/// contract guarantees a result-shaped answer for every submitted program,
/// and these errors carry the human-readable message the caller forwards
/// verbatim.
pub enum ExecError {
    /// A required input token failed to parse as the numeric type the active
    /// archetype expects.
    InvalidInput {
        /// The archetype whose input requirement was violated.
        archetype: Archetype,
    },
    /// Fewer input tokens were supplied than the program requires.
    InsufficientInput {
        /// The number of values the program reads.
        expected: usize,
        /// The number of values actually supplied.
        found:    usize,
    },
    /// The generic path produced zero output lines.
    NoOutputProduced,
    /// A canned algorithm exceeded the 64-bit integer range.
    Overflow {
        /// The archetype whose computation overflowed.
        archetype: Archetype,
    },
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { archetype } => match archetype {
                Archetype::Factorial => {
                    write!(f, "Invalid input for factorial program. Need an integer value.")
                },
                Archetype::Fibonacci => {
                    write!(f, "Invalid input for fibonacci program. Need an integer value.")
                },
                Archetype::BubbleSort => {
                    write!(f, "Invalid input for bubble sort. Need integers ending with 0.")
                },
                Archetype::Palindrome => {
                    write!(f, "Invalid input for palindrome check. Need an integer.")
                },
                Archetype::Arithmetic => {
                    write!(f, "Invalid input for arithmetic. Need numeric values.")
                },
                Archetype::Generic => write!(f, "Invalid input. Need a numeric value."),
            },
            Self::InsufficientInput { expected, found } => {
                write!(f, "Not enough input values. Expected {expected}, got {found}.")
            },
            Self::NoOutputProduced => {
                write!(f, "No output generated. Check your program logic.")
            },
            Self::Overflow { archetype } => {
                write!(f, "Integer overflow while running the {} program.", archetype.name())
            },
        }
    }
}

impl std::error::Error for ExecError {}
