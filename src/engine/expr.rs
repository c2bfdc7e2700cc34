/// The evaluator module computes the value of parsed write-expressions.
///
/// It walks the expression tree, resolves variables against the bindings
/// built from read-statements, and applies the four arithmetic operators
/// with integer/real promotion.
///
/// # Responsibilities
/// - Evaluates literals, variables, negation and binary arithmetic.
/// - Keeps integer arithmetic checked and promotes to real when needed.
/// - Reports evaluation errors such as division by zero or unbound names.
pub mod evaluator;
/// The lexer module tokenizes write-expression text.
///
/// The lexer reads the raw expression text extracted from a `write(...)`
/// call and produces a stream of tokens: numbers, identifiers, operators
/// and parentheses.
///
/// # Responsibilities
/// - Converts the expression text into tokens.
/// - Handles integer and real literals and identifiers.
/// - Surfaces unrecognized characters as lexical errors.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST with conventional operator precedence and
/// left-to-right associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces the closed expression grammar, rejecting anything else.
/// - Supports parenthesized groups and unary negation.
pub mod parser;
