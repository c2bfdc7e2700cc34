/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever a value crosses between `i64` and `f64`, for
/// example when an integer operand is promoted for real arithmetic or when a
/// whole-valued real is printed in integer form.
///
/// All fallible functions return a `Result` or an `Option` rather than
/// rounding silently.
pub mod num;
