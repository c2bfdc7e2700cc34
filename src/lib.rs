//! # minirun
//!
//! minirun is a fallback execution engine for MiniC teaching programs,
//! written in Rust. Instead of compiling or interpreting the submitted
//! statements, it classifies a program into one of several known archetypes
//! and computes the expected output with hand-written reference algorithms,
//! falling back to a generic read/write extractor for everything else.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::engine::{archetype, classify::Archetype, fallback};

/// Defines the structure of parsed write-expressions.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of an arithmetic expression as a tree. The AST
/// is built by the expression parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for the closed arithmetic grammar.
/// - Defines the unary and binary operator enums.
pub mod ast;
/// Orchestrates the entire process of program execution.
///
/// This module ties together comment stripping, input tokenization,
/// archetype classification, the canned executors and the generic fallback
/// to provide a complete engine for MiniC program execution.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, classifier, executors,
///   fallback and value formatting.
/// - Manages the flow of data and errors between phases.
pub mod engine;
/// Provides unified error types for execution and expression evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. It standardizes error reporting and carries the exact
/// human-readable messages callers forward to users.
///
/// # Responsibilities
/// - Defines error enums for run-aborting and per-expression failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers for converting between integer and
/// floating-point types without silent data loss, used by the evaluator and
/// the output formatting.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64`.
/// - Detect whole-valued reals for integer-form printing.
pub mod util;

pub use error::ExecError;

/// Executes a MiniC program against a stream of input values.
///
/// Comments are stripped, the input blob is tokenized into trimmed
/// non-empty lines, and the program is classified by marker substrings.
/// Recognized archetypes run their reference algorithm; everything else
/// goes through the generic read/write extractor. The produced lines are
/// joined with newlines.
///
/// The function is pure and synchronous: every call builds its own state,
/// so concurrent calls are safe without locking.
///
/// # Errors
/// Returns an error when input tokens are missing or unparseable for the
/// chosen path, when a canned algorithm overflows, or when the generic path
/// produces no output. The error's `Display` is the user-facing message.
///
/// # Examples
/// ```
/// use minirun::execute;
///
/// // An unrecognized program falls back to read/write extraction.
/// let source = "int main() { int n; read(n); write(n * n); return 0; }";
/// let output = execute(source, "7").unwrap();
/// assert_eq!(output, "49");
///
/// // A factorial-shaped program is recognized and executed directly.
/// let source = "int factorial(int n) { /* ... */ } int main() { read(n); }";
/// let output = execute(source, "5").unwrap();
/// assert_eq!(output, "5\n120");
///
/// // Missing input aborts with a failure result.
/// let res = execute("int main() { read(x); write(x); }", "");
/// assert!(res.is_err());
/// ```
pub fn execute(source: &str, input: &str) -> Result<String, ExecError> {
    let stripped = engine::source::strip_comments(source);
    let inputs = engine::input::tokenize(input);

    let lines = match engine::classify::classify(&stripped, &inputs) {
        Archetype::Factorial => archetype::factorial::run(&inputs)?,
        Archetype::Fibonacci => archetype::fibonacci::run(&inputs)?,
        Archetype::BubbleSort => archetype::bubble_sort::run(&inputs)?,
        Archetype::Palindrome => archetype::palindrome::run(&inputs)?,
        Archetype::Arithmetic => archetype::arithmetic::run(&inputs)?,
        Archetype::Generic => fallback::run(&stripped, &inputs)?,
    };

    Ok(lines.join("\n"))
}
