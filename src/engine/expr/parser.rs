use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    engine::expr::lexer::Token,
    error::ExprError,
};

pub type ParseResult<T> = Result<T, ExprError>;

/// Parses a complete write-expression from source text.
///
/// This is the entry point for expression parsing. The text is tokenized,
/// parsed starting at the lowest-precedence level, and checked for leftover
/// tokens so that partial parses are rejected.
///
/// # Parameters
/// - `source`: The raw expression text extracted from a `write(...)` call.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - `UnexpectedToken` if the text contains characters outside the grammar.
/// - `TrailingTokens` if tokens remain after a complete expression.
/// - Propagates any errors from sub-expression parsing.
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(ExprError::UnexpectedToken { token: lexer.slice().to_string() });
        }
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some(token) = iter.next() {
        return Err(ExprError::TrailingTokens { token: token.to_string() });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some(token) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_term(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`.
///
/// Grammar: `term := unary (("*" | "/") unary)*`
fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(token) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a unary expression.
///
/// Grammar: `unary := "-" unary | primary`
fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Minus) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(operand), });
    }
    parse_primary(tokens)
}

/// Parses a primary expression.
///
/// Grammar: `primary := Integer | Real | Identifier | "(" expression ")"`
///
/// # Errors
/// - `UnexpectedEndOfInput` if the token stream is exhausted.
/// - `ExpectedClosingParen` if a parenthesized group is not closed.
/// - `UnexpectedToken` for any token outside the grammar position.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Integer(n)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n) }),
        Some(Token::Real(r)) => Ok(Expr::Literal { value: LiteralValue::Real(*r) }),
        Some(Token::Identifier(name)) => Ok(Expr::Variable { name: name.clone() }),
        Some(Token::LParen) => {
            let inner = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(inner),
                _ => Err(ExprError::ExpectedClosingParen),
            }
        },
        Some(token) => Err(ExprError::UnexpectedToken { token: token.to_string() }),
        None => Err(ExprError::UnexpectedEndOfInput),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// arithmetic operators, and `None` for all other tokens.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
