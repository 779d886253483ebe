/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values
/// to integer types without risking silent truncation. Use these helpers
/// whenever an operand must be a whole number, such as a factorial argument
/// or a random bound.
///
/// All conversions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or the caller's error if the value is out of range or
/// not an integer.
pub mod num;
