/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// How far a scalar may be from an integer and still count as one.
pub const INTEGRAL_TOLERANCE: f64 = 1e-4;

/// Returns the integer a scalar stands for, if it is close enough to one.
///
/// The value must be finite, within [`INTEGRAL_TOLERANCE`] of an integer and
/// no larger in magnitude than [`MAX_SAFE_INT`].
///
/// ## Example
/// ```
/// use seqfn::util::num::as_integral;
///
/// assert_eq!(as_integral(4.0), Some(4));
/// assert_eq!(as_integral(-2.00001), Some(-2));
/// assert_eq!(as_integral(4.5), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn as_integral(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    let rounded = value.round();
    if (value - rounded).abs() >= INTEGRAL_TOLERANCE || rounded.abs() > MAX_SAFE_INT {
        return None;
    }

    Some(rounded as i64)
}

/// Converts a scalar to a count, accepting only non-negative integral values.
///
/// ## Example
/// ```
/// use seqfn::util::num::as_count;
///
/// assert_eq!(as_count(3.0), Some(3));
/// assert_eq!(as_count(-1.0), None);
/// assert_eq!(as_count(2.5), None);
/// ```
#[must_use]
pub fn as_count(value: f64) -> Option<usize> {
    as_integral(value).and_then(|n| usize::try_from(n).ok())
}

/// Converts a count to a scalar.
///
/// Counts in this interpreter are bounded by memory, far below `2^53`, so
/// the conversion is exact in practice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn count_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts an integer produced by [`as_integral`] back to a scalar.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn integral_to_f64(value: i64) -> f64 {
    value as f64
}
