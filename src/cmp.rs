//! Standard predicates and clamping.

use crate::error::ClampError;

/// The default ordering predicate, `a < b`.
#[inline]
pub fn less<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Reverse ordering predicate, `b < a`. Passing it to a `*_by` function sorts or searches in
/// descending order.
#[inline]
pub fn greater<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    b < a
}

/// Restricts `value` to the closed interval `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `max < value` and `value` otherwise. `max` must not
/// compare less than `min`, this is checked in debug builds only. With inverted bounds the
/// result is one of the three inputs, but which one is unspecified. See [`checked_clamp`] for a
/// variant that reports inverted bounds.
#[inline]
pub fn clamp<T: PartialOrd>(min: T, value: T, max: T) -> T {
    clamp_by(min, value, max, less)
}

/// [`clamp`] with a custom `is_less` predicate.
pub fn clamp_by<T, F>(min: T, value: T, max: T, mut is_less: F) -> T
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!is_less(&max, &min), "clamp called with max < min");

    if is_less(&value, &min) {
        min
    } else if is_less(&max, &value) {
        max
    } else {
        value
    }
}

/// [`clamp`] that rejects inverted bounds instead of asserting.
pub fn checked_clamp<T: PartialOrd>(min: T, value: T, max: T) -> Result<T, ClampError> {
    if max < min {
        return Err(ClampError::InvertedBounds);
    }

    Ok(clamp(min, value, max))
}
