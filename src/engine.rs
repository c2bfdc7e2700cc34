/// The archetype executors: five canned reference algorithms.
///
/// Each executor consumes parsed input values and produces output lines
/// using its own known-correct algorithm, ignoring the actual statements in
/// the submitted source.
///
/// # Responsibilities
/// - Implements factorial, Fibonacci, bubble sort, palindrome and
///   arithmetic.
/// - Validates the input tokens each algorithm requires.
/// - Keeps every computation iterative and overflow-checked.
pub mod archetype;
/// The classifier decides which executor handles a program.
///
/// It inspects the comment-stripped source for marker substrings and picks
/// one of the five archetypes, or the generic fallback, in a fixed priority
/// order.
///
/// # Responsibilities
/// - Defines the `Archetype` enum.
/// - Applies the marker tests in priority order, first match wins.
pub mod classify;
/// The expression sublanguage of the generic path.
///
/// A small lexer, parser and evaluator for the arithmetic expressions found
/// inside `write(...)` calls: numeric literals, bound identifiers and the
/// four binary operators.
///
/// # Responsibilities
/// - Coordinates the expression lexer, parser and evaluator.
/// - Confines evaluation to a closed grammar rather than general code.
pub mod expr;
/// The generic extractor/evaluator fallback.
///
/// Scans an unclassified program for read/write call shapes, binds declared
/// reads to sequential input values and renders each write-expression to an
/// output line.
///
/// # Responsibilities
/// - Binds read identifiers to input tokens in order of appearance.
/// - Renders variable lookups, literals and arithmetic expressions.
/// - Degrades per-expression failures to inline error lines.
pub mod fallback;
/// The input tokenizer.
///
/// Splits the raw input blob into the ordered sequence of trimmed,
/// non-empty value tokens consumed by whichever executor runs.
pub mod input;
/// The source scanner: comment stripping and call-shape extraction.
///
/// Removes line and block comments before any analysis, and extracts
/// `read(identifier)` and `write(expression)` call shapes from the stripped
/// text.
///
/// # Responsibilities
/// - Strips `//` and `/* ... */` comments, preserving everything else.
/// - Extracts read identifiers and raw write-expression text, in source
///   order.
pub mod source;
/// The value module defines the runtime data types of a run.
///
/// Declares the `Value` enum an input token binds to, and its display
/// formatting that prints whole-valued reals in integer form.
pub mod value;
