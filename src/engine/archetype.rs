use crate::{engine::classify::Archetype, error::ExecError};

/// Factorial of one integer input.
///
/// Emits the input followed by `n!`, computed with an iterative
/// accumulator.
pub mod factorial;
/// The first `n` Fibonacci numbers.
///
/// Emits `fib(1)` through `fib(n)` from a memo table built per call.
pub mod fibonacci;
/// Ascending sort of a zero-terminated integer list.
///
/// Classic adjacent-swap bubble sort; one output line per value.
pub mod bubble_sort;
/// Digit-reversal palindrome check of one integer input.
///
/// Emits `1` when the value equals its own digit reversal, else `0`.
pub mod palindrome;
/// Four-function arithmetic over two numeric inputs.
///
/// Emits sum, difference, product and quotient, with a literal error line
/// replacing the quotient when the divisor is zero.
pub mod arithmetic;

/// Result type shared by the archetype executors: the produced output lines
/// or a run-aborting error.
pub type ArchetypeResult = Result<Vec<String>, ExecError>;

/// Parses the leading input token as an integer.
///
/// # Parameters
/// - `inputs`: The input token sequence.
/// - `archetype`: The active archetype, used to shape the error message.
///
/// # Errors
/// `InvalidInput` when no token is available or the token is not an
/// integer.
fn leading_integer(inputs: &[String], archetype: Archetype) -> Result<i64, ExecError> {
    inputs.first()
          .and_then(|token| token.parse().ok())
          .ok_or(ExecError::InvalidInput { archetype })
}
