/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Tests whether `value` is a finite whole number.
///
/// ## Example
/// ```
/// use vecalc::util::num::is_integral;
///
/// assert!(is_integral(4.0));
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// exactly representable and not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative, fractional or too large
/// values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if the conversion is not lossless.
///
/// ## Example
/// ```
/// use vecalc::util::num::{MAX_SAFE_U64_INT, f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0, "bad"), Ok(7));
/// assert_eq!(f64_to_u64_checked(-5.0, "bad"), Err("bad"));
/// assert_eq!(f64_to_u64_checked(1.23, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked<E>(value: f64, error: E) -> Result<u64, E> {
    if !is_integral(value) || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }
    Ok(value as u64)
}

/// Safely converts an `f64` to `u32` if it is a whole number in range.
///
/// ## Errors
/// Returns `Err(error)` under the same conditions as
/// [`f64_to_u64_checked`], or if the value exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use vecalc::util::num::f64_to_u32_checked;
///
/// assert_eq!(f64_to_u32_checked(45.0, ()), Ok(45));
/// assert!(f64_to_u32_checked(5e9, ()).is_err());
/// ```
pub fn f64_to_u32_checked<E>(value: f64, error: E) -> Result<u32, E> {
    match f64_to_u64_checked(value, ()).map(u32::try_from) {
        Ok(Ok(v)) => Ok(v),
        _ => Err(error),
    }
}
