use std::collections::HashMap;

use minirun::{
    engine::{
        expr::{evaluator, parser},
        value::Value,
    },
    error::ExprError,
};

fn eval(source: &str, bindings: &HashMap<String, Value>) -> Result<Value, ExprError> {
    parser::parse(source).and_then(|expr| evaluator::evaluate(&expr, bindings))
}

fn eval_unbound(source: &str) -> Result<Value, ExprError> {
    eval(source, &HashMap::new())
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval_unbound("2 + 3 * 4").unwrap(), Value::Integer(14));
    assert_eq!(eval_unbound("2 * 3 + 4").unwrap(), Value::Integer(10));
}

#[test]
fn same_precedence_associates_left_to_right() {
    assert_eq!(eval_unbound("10 - 3 - 4").unwrap(), Value::Integer(3));
    assert_eq!(eval_unbound("24 / 4 / 3").unwrap(), Value::Real(2.0));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_unbound("(2 + 3) * 4").unwrap(), Value::Integer(20));
}

#[test]
fn division_happens_over_reals() {
    assert_eq!(eval_unbound("7 / 2").unwrap(), Value::Real(3.5));
    assert_eq!(eval_unbound("8 / 2").unwrap().to_string(), "4");
}

#[test]
fn unary_negation() {
    assert_eq!(eval_unbound("-5 + 2").unwrap(), Value::Integer(-3));
    assert_eq!(eval_unbound("2 * -3").unwrap(), Value::Integer(-6));
}

#[test]
fn real_literals_mix_with_integers() {
    assert_eq!(eval_unbound("1.5 + 1").unwrap(), Value::Real(2.5));
}

#[test]
fn variables_resolve_against_bindings() {
    let mut bindings = HashMap::new();
    bindings.insert("x".to_string(), Value::Integer(4));

    assert_eq!(eval("x * x", &bindings).unwrap(), Value::Integer(16));
    assert_eq!(eval("x + 1", &bindings).unwrap(), Value::Integer(5));
}

#[test]
fn unbound_variable_is_an_error() {
    assert_eq!(eval_unbound("y + 1").unwrap_err(),
               ExprError::UnknownVariable { name: "y".to_string() });
}

#[test]
fn text_bound_variable_is_an_error() {
    let mut bindings = HashMap::new();
    bindings.insert("x".to_string(), Value::Text("hello".to_string()));

    assert_eq!(eval("x + 1", &bindings).unwrap_err(),
               ExprError::NonNumericVariable { name: "x".to_string() });
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_unbound("1 / 0").unwrap_err(), ExprError::DivisionByZero);
    assert_eq!(eval_unbound("1 / 0.0").unwrap_err(), ExprError::DivisionByZero);
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(eval_unbound("9223372036854775807 + 1").unwrap_err(), ExprError::Overflow);
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(eval_unbound("2 3").unwrap_err(),
               ExprError::TrailingTokens { token: "3".to_string() });
}

#[test]
fn unrecognized_characters_are_rejected() {
    assert_eq!(eval_unbound("2 $ 2").unwrap_err(),
               ExprError::UnexpectedToken { token: "$".to_string() });
}

#[test]
fn empty_expression_is_rejected() {
    assert_eq!(eval_unbound("").unwrap_err(), ExprError::UnexpectedEndOfInput);
}

#[test]
fn unclosed_group_is_rejected() {
    assert_eq!(eval_unbound("(1 + 2").unwrap_err(), ExprError::ExpectedClosingParen);
}

#[test]
fn whole_reals_print_in_integer_form() {
    assert_eq!(Value::Real(4.0).to_string(), "4");
    assert_eq!(Value::Real(-12.0).to_string(), "-12");
    assert_eq!(Value::Real(3.5).to_string(), "3.5");
}
