/// Run-level errors.
///
/// Defines all error types that abort an entire engine invocation: invalid
/// or missing input for an archetype, an empty generic result, or an
/// arithmetic overflow inside a canned algorithm. Each carries the exact
/// user-facing message.
pub mod exec_error;
/// Expression-level errors.
///
/// Contains all error types that can be raised while parsing or evaluating a
/// single write-expression. These are recovered per-expression and rendered
/// inline in the output rather than aborting the run.
pub mod expr_error;

pub use exec_error::ExecError;
pub use expr_error::ExprError;
