use crate::{
    engine::{
        archetype::{ArchetypeResult, leading_integer},
        classify::Archetype,
    },
    error::ExecError,
};

/// Runs the factorial reference algorithm.
///
/// Parses the first input token as an integer `n` and emits two lines: `n`
/// itself, then `n!`. Values of `n` below 2, including negatives, yield a
/// factorial of 1.
///
/// The product is accumulated iteratively with checked multiplication, so
/// large `n` reports an overflow instead of exhausting the stack or
/// wrapping.
///
/// # Errors
/// - `InvalidInput` when the first token is missing or not an integer.
/// - `Overflow` when `n!` exceeds the 64-bit integer range.
pub fn run(inputs: &[String]) -> ArchetypeResult {
    let n = leading_integer(inputs, Archetype::Factorial)?;

    let mut product: i64 = 1;
    for factor in 2..=n {
        product = product.checked_mul(factor)
                         .ok_or(ExecError::Overflow { archetype: Archetype::Factorial })?;
    }

    Ok(vec![n.to_string(), product.to_string()])
}
