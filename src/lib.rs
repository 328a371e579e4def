//! Ordered-sequence utilities.
//!
//! Generic copy, fill, find, count, sort, bound-finding and clamp helpers over slices. A sequence
//! is a slice, `begin` is index `0` and `end` is `len`. Every position returned by this crate is
//! an index into the slice it was computed on, with `len` standing in for "not found".
//!
//! Operations that take a predicate expect an `is_less` closure, answering whether the first
//! argument is strictly ordered before the second. It must implement a strict weak ordering. If
//! it doesn't, results are unspecified but the functions still terminate. Neither the stable nor
//! the unstable sort panics because of such a predicate. Both keep the original set of elements.
//!
//! ```
//! let mut v = [5, 3, 1, 4, 1, 5, 9, 2, 6];
//! ordseq::sort(&mut v);
//! assert_eq!(v, [1, 1, 2, 3, 4, 5, 5, 6, 9]);
//!
//! assert_eq!(ordseq::lower_bound(&v, &5), 5);
//! assert_eq!(ordseq::upper_bound(&v, &5), 7);
//! assert_eq!(ordseq::binary_find(&v, &7), v.len());
//! ```

pub mod cmp;
pub mod container;
pub mod error;
pub mod search;
pub mod seq;
pub mod stable;
pub mod unstable;

pub use cmp::{checked_clamp, clamp, clamp_by, greater, less};
pub use error::ClampError;
pub use search::{
    binary_find, binary_find_by, equal_range, equal_range_by, lower_bound, lower_bound_by,
    upper_bound, upper_bound_by,
};
pub use seq::{
    copy, copy_backward, copy_backward_within, copy_within, count, equal, fill, find, swap,
    swap_at,
};
pub use unstable::{sort, sort_by};

/// Stable counterpart of [`sort`], see [`stable::sort`].
#[inline]
pub fn stable_sort<T: Ord>(v: &mut [T]) {
    stable::sort(v);
}

/// Stable counterpart of [`sort_by`], see [`stable::sort_by`].
#[inline]
pub fn stable_sort_by<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    stable::sort_by(v, is_less);
}
