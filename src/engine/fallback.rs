use std::collections::HashMap;

use crate::{
    engine::{
        expr::{evaluator, parser},
        source,
        value::Value,
    },
    error::ExecError,
};

/// Runs the generic extractor/evaluator over an unclassified program.
///
/// Read-statements are bound to input tokens in order of appearance, then
/// every write-statement is rendered to one output line: a direct variable
/// lookup, a verbatim integer literal, an evaluated arithmetic expression,
/// or an `Unknown value:` line for anything else. A failing expression
/// degrades to an inline `Error:` line rather than aborting the run.
///
/// # Parameters
/// - `source`: Comment-stripped program text.
/// - `inputs`: The input token sequence.
///
/// # Errors
/// - `InsufficientInput` when the program reads more values than were
///   supplied.
/// - `NoOutputProduced` when no write-statement produced a line.
pub fn run(source: &str, inputs: &[String]) -> Result<Vec<String>, ExecError> {
    let reads = source::read_variables(source);
    let writes = source::write_expressions(source);

    if reads.len() > inputs.len() {
        return Err(ExecError::InsufficientInput { expected: reads.len(),
                                                  found:    inputs.len(), });
    }

    let mut bindings = HashMap::new();
    for (name, token) in reads.into_iter().zip(inputs) {
        bindings.insert(name, bind_token(token));
    }

    let lines: Vec<String> = writes.iter()
                                   .map(|expression| render(expression, &bindings))
                                   .collect();

    if lines.is_empty() {
        return Err(ExecError::NoOutputProduced);
    }
    Ok(lines)
}

/// Converts one input token into its bound value.
///
/// Tokens containing a decimal point parse as reals, all others as
/// integers; a token that parses as neither is retained verbatim as text.
fn bind_token(token: &str) -> Value {
    if token.contains('.') {
        token.parse::<f64>()
             .map_or_else(|_| Value::Text(token.to_string()), Value::Real)
    } else {
        token.parse::<i64>()
             .map_or_else(|_| Value::Text(token.to_string()), Value::Integer)
    }
}

/// Renders one write-expression to its output line.
///
/// The checks run in a fixed order: a bound variable's value wins, then a
/// verbatim signed integer literal, then arithmetic evaluation for any text
/// containing an operator character. Everything else reports an unknown
/// value. Expression failures render inline instead of propagating.
fn render(expression: &str, bindings: &HashMap<String, Value>) -> String {
    if let Some(value) = bindings.get(expression) {
        return value.to_string();
    }

    if is_integer_literal(expression) {
        return expression.to_string();
    }

    if expression.contains(['+', '-', '*', '/']) {
        return match parser::parse(expression).and_then(|expr| {
                                                  evaluator::evaluate(&expr, bindings)
                                              }) {
            Ok(value) => value.to_string(),
            Err(e) => format!("Error: {e}"),
        };
    }

    format!("Unknown value: {expression}")
}

/// Returns `true` for an optionally-signed run of ASCII digits.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
