use crate::engine::{
    archetype::{ArchetypeResult, leading_integer},
    classify::Archetype,
};

/// Runs the palindrome reference algorithm.
///
/// Parses the first input token as an integer and reverses its decimal
/// digits by repeated `% 10` and `/ 10`. Emits `"1"` when the value equals
/// its own reversal, else `"0"`.
///
/// The reversal loop only runs while the value is positive, so negative
/// inputs never equal their (zero) reversal and inputs with trailing zeros
/// compare against the shorter reversed form. This is pure digit reversal,
/// not full numeric palindrome semantics.
///
/// # Errors
/// `InvalidInput` when the first token is missing or not an integer.
pub fn run(inputs: &[String]) -> ArchetypeResult {
    let n = leading_integer(inputs, Archetype::Palindrome)?;

    // Accumulating in i128 keeps the reversal of any 19-digit value in
    // range.
    let original = i128::from(n);
    let mut remaining = original;
    let mut reversed: i128 = 0;

    while remaining > 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }

    let line = if original == reversed { "1" } else { "0" };
    Ok(vec![line.to_string()])
}
