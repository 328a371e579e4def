//! Binary searches over slices ordered by `is_less`.
//!
//! All functions in this module expect `v` to be sorted with respect to the same predicate they
//! are called with. On unsorted input they still terminate after *O*(log(*n*)) comparisons and
//! return an in-bounds position or `v.len()`, but the position has no meaning.
//!
//! Slices longer than `isize::MAX` elements can only be formed from zero-sized types. Searching
//! them is treated as misuse: the bound functions return `0` and [`binary_find_by`] returns
//! `v.len()` without comparing anything.

use core::ops::Range;

const MAX_SEARCH_LEN: usize = isize::MAX as usize;

/// Returns the index of the first element that is not less than `value`.
#[inline]
pub fn lower_bound<T: Ord>(v: &[T], value: &T) -> usize {
    lower_bound_by(v, value, |a, b| a.lt(b))
}

/// Returns the first index `i` for which `is_less(&v[i], value)` is false, or `v.len()`.
pub fn lower_bound_by<T, F>(v: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() > MAX_SEARCH_LEN {
        return 0;
    }

    partition_point(v, |elem| is_less(elem, value))
}

/// Returns the index of the first element that is greater than `value`.
#[inline]
pub fn upper_bound<T: Ord>(v: &[T], value: &T) -> usize {
    upper_bound_by(v, value, |a, b| a.lt(b))
}

/// Returns the first index `i` for which `is_less(value, &v[i])` is true, or `v.len()`.
pub fn upper_bound_by<T, F>(v: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() > MAX_SEARCH_LEN {
        return 0;
    }

    partition_point(v, |elem| !is_less(value, elem))
}

/// Returns the index of an element equal to `value`, or `v.len()` if there is none.
///
/// If several elements compare equal, the first of them is returned.
#[inline]
pub fn binary_find<T: Ord>(v: &[T], value: &T) -> usize {
    binary_find_by(v, value, |a, b| a.lt(b))
}

/// Returns the index of an element that is neither less nor greater than `value` under
/// `is_less`, or `v.len()` if there is none.
pub fn binary_find_by<T, F>(v: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len > MAX_SEARCH_LEN {
        return len;
    }

    let pos = partition_point(v, |elem| is_less(elem, value));
    match v.get(pos) {
        Some(found) if !is_less(value, found) => pos,
        _ => len,
    }
}

/// Returns `lower_bound(v, value)..upper_bound(v, value)`, the range of elements equal to
/// `value`.
#[inline]
pub fn equal_range<T: Ord>(v: &[T], value: &T) -> Range<usize> {
    equal_range_by(v, value, |a, b| a.lt(b))
}

/// [`equal_range`] with a custom `is_less` predicate.
///
/// Both bounds share the search until the first element equal to `value` is found, after that
/// the two halves around it are searched separately.
pub fn equal_range_by<T, F>(v: &[T], value: &T, mut is_less: F) -> Range<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() > MAX_SEARCH_LEN {
        return 0..0;
    }

    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if is_less(&v[mid], value) {
            lo = mid + 1;
        } else if is_less(value, &v[mid]) {
            hi = mid;
        } else {
            let first = lo + partition_point(&v[lo..mid], |elem| is_less(elem, value));
            let last = (mid + 1) + partition_point(&v[(mid + 1)..hi], |elem| !is_less(value, elem));
            return first..last;
        }
    }

    lo..lo
}

/// Returns the index of the first element for which `pred` is false, assuming `pred` is true for
/// a prefix of `v` and false for the rest.
///
/// The loop runs a fixed number of iterations for a given length, independent of the outcome of
/// `pred`.
fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // There are v.len() + 1 possible outcomes of the search.
    // Invariant: [i+1, i+1+n) contains the result. i starts out as -1.
    let mut n = v.len() + 1;
    let mut i = usize::MAX;

    while n > 1 {
        // n only ever shrinks by floor(n / 2), so it ends at exactly 1. i and mid grow by at most
        // the amount n shrinks, which keeps mid within [0, v.len()).
        let mid = i.wrapping_add(n / 2);

        if pred(&v[mid]) {
            i = mid;
        }
        n -= n / 2;
    }

    i.wrapping_add(1)
}
