use crate::{
    engine::{archetype::ArchetypeResult, classify::Archetype, value::Value},
    error::ExecError,
};

/// The line emitted in place of a quotient when the divisor is zero.
pub const DIVISION_BY_ZERO_LINE: &str = "Division by zero error";

/// Runs the four-function arithmetic reference algorithm.
///
/// Parses the first two input tokens as floating-point numbers and emits
/// four lines: sum, difference, product and quotient. Each numeric result
/// prints in integer form when it has no fractional part. A zero divisor
/// substitutes [`DIVISION_BY_ZERO_LINE`] for the quotient instead of
/// failing the run.
///
/// # Errors
/// - `InsufficientInput` when fewer than two tokens are available.
/// - `InvalidInput` when either token is not numeric.
pub fn run(inputs: &[String]) -> ArchetypeResult {
    let (Some(first), Some(second)) = (inputs.first(), inputs.get(1)) else {
        return Err(ExecError::InsufficientInput { expected: 2,
                                                  found:    inputs.len(), });
    };

    let invalid = ExecError::InvalidInput { archetype: Archetype::Arithmetic };
    let a: f64 = first.parse().map_err(|_| invalid.clone())?;
    let b: f64 = second.parse().map_err(|_| invalid)?;

    let mut lines = vec![Value::Real(a + b).to_string(),
                         Value::Real(a - b).to_string(),
                         Value::Real(a * b).to_string()];

    if b == 0.0 {
        lines.push(DIVISION_BY_ZERO_LINE.to_string());
    } else {
        lines.push(Value::Real(a / b).to_string());
    }

    Ok(lines)
}
