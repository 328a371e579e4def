//! Stable sorting.
//!
//! Short inputs are insertion sorted in place. Longer ones are sorted with a TimSort that works
//! on a permutation of indices and applies it to the slice at the end, which keeps the
//! implementation free of `unsafe` and needs no `Clone` bound. The sort is *O*(*n* \* log(*n*))
//! worst-case, *O*(*n*) on inputs made of few natural runs, and allocates `1.5 * v.len()` indices.

mod merge;

use crate::unstable::smallsort::insertion_sort_shift_left;

/// Sorts the slice, preserving the order of equal elements.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// ordseq::stable::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with an `is_less` predicate, preserving the order of elements for which
/// neither `is_less(a, b)` nor `is_less(b, a)` holds.
///
/// `is_less` must define a strict weak ordering. If it doesn't, the resulting order is
/// unspecified, but the call returns normally and all original elements remain in the slice. If
/// `is_less` panics, the panic propagates and the slice keeps its original order.
///
/// # Examples
///
/// ```
/// let mut v = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
///
/// ordseq::stable::sort_by(&mut v, |a, b| a.0 < b.0);
/// assert!(v == [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    stable_sort(v, is_less);
}

// --- IMPL ---

/// Inputs up to this length are sorted with insertion sort, without allocating.
const MAX_LEN_ALWAYS_INSERTION_SORT: usize = 20;

fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if core::mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();

    if len < 2 {
        return;
    }

    if len <= MAX_LEN_ALWAYS_INSERTION_SORT {
        // Insertion only moves an element past strictly greater ones, which keeps it stable.
        insertion_sort_shift_left(v, 1, &mut is_less);
        return;
    }

    merge::merge_sort(v, &mut is_less);
}
