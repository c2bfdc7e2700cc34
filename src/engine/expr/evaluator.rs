use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    engine::value::Value,
    error::ExprError,
    util::num::i64_to_f64_checked,
};

/// Result type used by the expression evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ExprError` describing the failure.
pub type EvalResult<T> = Result<T, ExprError>;

/// Evaluates a parsed write-expression against the variable bindings.
///
/// The evaluator dispatches on the expression variant: literals yield their
/// value, variables resolve against the bindings, and unary and binary
/// operations recurse into their operands.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `bindings`: Variables bound by the read-statements of the program.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `UnknownVariable` if a variable has no binding.
/// - `NonNumericVariable` if a bound value is raw text.
/// - `DivisionByZero` and `Overflow` for the corresponding arithmetic
///   failures.
pub fn evaluate(expr: &Expr, bindings: &HashMap<String, Value>) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(value.into()),
        Expr::Variable { name } => match bindings.get(name) {
            Some(value) if value.is_numeric() => Ok(value.clone()),
            Some(_) => Err(ExprError::NonNumericVariable { name: name.clone() }),
            None => Err(ExprError::UnknownVariable { name: name.clone() }),
        },
        Expr::UnaryOp { op, expr } => {
            let operand = evaluate(expr, bindings)?;
            eval_unary(*op, &operand)
        },
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left, bindings)?;
            let right = evaluate(right, bindings)?;
            eval_binary(*op, &left, &right)
        },
    }
}

/// Evaluates a unary operation on a computed operand.
fn eval_unary(op: UnaryOperator, operand: &Value) -> EvalResult<Value> {
    match (op, operand) {
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg().map(Value::Integer).ok_or(ExprError::Overflow)
        },
        (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
        (UnaryOperator::Negate, Value::Text(_)) => unreachable!("text never reaches arithmetic"),
    }
}

/// Evaluates a binary arithmetic operation.
///
/// Integer operands stay integer for `+`, `-` and `*`, with overflow
/// checked. A real operand on either side promotes both sides to real.
/// Division always happens over reals, so `7 / 2` yields `3.5`; the
/// whole-valued quotient `6 / 3` prints as `2` through [`Value`]'s display
/// formatting.
fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    if let Div = op {
        let divisor = as_real(right)?;
        if divisor == 0.0 {
            return Err(ExprError::DivisionByZero);
        }
        return Ok(Value::Real(as_real(left)? / divisor));
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => match op {
            Add => a.checked_add(*b).map(Value::Integer).ok_or(ExprError::Overflow),
            Sub => a.checked_sub(*b).map(Value::Integer).ok_or(ExprError::Overflow),
            Mul => a.checked_mul(*b).map(Value::Integer).ok_or(ExprError::Overflow),
            Div => unreachable!("handled above"),
        },
        _ => {
            let left = as_real(left)?;
            let right = as_real(right)?;

            Ok(Value::Real(match op {
                               Add => left + right,
                               Sub => left - right,
                               Mul => left * right,
                               Div => unreachable!("handled above"),
                           }))
        },
    }
}

/// Converts a numeric value to `f64` for real arithmetic.
///
/// Integers convert only when exactly representable; larger magnitudes are
/// reported as overflow instead of rounding silently.
fn as_real(value: &Value) -> EvalResult<f64> {
    match value {
        Value::Real(r) => Ok(*r),
        Value::Integer(n) => i64_to_f64_checked(*n, ExprError::Overflow),
        Value::Text(_) => unreachable!("text never reaches arithmetic"),
    }
}
