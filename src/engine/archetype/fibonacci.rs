use crate::{
    engine::{
        archetype::{ArchetypeResult, leading_integer},
        classify::Archetype,
    },
    error::ExecError,
};

/// Runs the Fibonacci reference algorithm.
///
/// Parses the first input token as an integer `n` and emits one line per
/// sequence member, `fib(1)` through `fib(n)`, with `fib(0) = 0` and
/// `fib(1) = 1`. For `n <= 0` nothing is emitted and the run still
/// succeeds.
///
/// The sequence is memoized in a table extended once per new index, so each
/// member is computed exactly once.
///
/// # Errors
/// - `InvalidInput` when the first token is missing or not an integer.
/// - `Overflow` when a sequence member exceeds the 64-bit integer range.
pub fn run(inputs: &[String]) -> ArchetypeResult {
    let n = leading_integer(inputs, Archetype::Fibonacci)?;

    let mut table: Vec<i64> = vec![0, 1];
    let mut lines = Vec::new();

    for k in 1..=n {
        // Overflow aborts at fib(93), long before the index can outgrow
        // usize.
        let k = usize::try_from(k).map_err(|_| ExecError::Overflow { archetype:
                                                                         Archetype::Fibonacci })?;
        if k >= table.len() {
            let next = table[k - 1].checked_add(table[k - 2])
                                   .ok_or(ExecError::Overflow { archetype:
                                                                    Archetype::Fibonacci })?;
            table.push(next);
        }
        lines.push(table[k].to_string());
    }

    Ok(lines)
}
