use crate::{
    engine::{archetype::ArchetypeResult, classify::Archetype},
    error::ExecError,
};

/// Runs the bubble sort reference algorithm.
///
/// Consumes input tokens in order, parsing each as an integer, until a
/// token equals `0` (exclusive) or the tokens run out. The collected values
/// are sorted ascending with pairwise adjacent swaps; only a strict `>`
/// triggers a swap, so equal keys keep their relative order. Emits one line
/// per sorted value.
///
/// # Errors
/// `InvalidInput` when a token before the terminator is not an integer.
pub fn run(inputs: &[String]) -> ArchetypeResult {
    let mut numbers: Vec<i64> = Vec::new();

    for token in inputs {
        let value = token.parse()
                         .map_err(|_| ExecError::InvalidInput { archetype:
                                                                    Archetype::BubbleSort })?;
        if value == 0 {
            break;
        }
        numbers.push(value);
    }

    for pass in 0..numbers.len() {
        for j in 0..numbers.len() - pass - 1 {
            if numbers[j] > numbers[j + 1] {
                numbers.swap(j, j + 1);
            }
        }
    }

    Ok(numbers.iter().map(ToString::to_string).collect())
}
