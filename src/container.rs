//! Container-level forms of the slice operations.
//!
//! Anything that can lend out its elements as a contiguous slice implements [`Seq`], and
//! [`SeqMut`] if it can do so mutably. The functions here forward to the slice operations on the
//! whole container.

use crate::{search, seq, stable, unstable};

/// Storage that can lend out its elements as one contiguous slice.
pub trait Seq<T> {
    fn as_slice(&self) -> &[T];
}
/// [`Seq`] that can also lend out its elements mutably.
pub trait SeqMut<T>: Seq<T> {
    fn as_slice_mut(&mut self) -> &mut [T];
}

impl<T> Seq<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> SeqMut<T> for [T] {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Seq<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> SeqMut<T> for Vec<T> {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Seq<T> for Box<[T]> {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> SeqMut<T> for Box<[T]> {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Seq<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T, const N: usize> SeqMut<T> for [T; N] {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Seq<T> for &[T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> Seq<T> for &mut [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> SeqMut<T> for &mut [T] {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

/// Assigns `value` to every element, see [`seq::fill`].
pub fn fill<T: Clone, C: SeqMut<T> + ?Sized>(container: &mut C, value: T) {
    seq::fill(container.as_slice_mut(), value);
}

/// Returns the index of the first element equal to `value`, or the container length.
pub fn find<T: PartialEq, C: Seq<T> + ?Sized>(container: &C, value: &T) -> usize {
    seq::find(container.as_slice(), value)
}

/// Returns the number of elements equal to `value`.
pub fn count<T: PartialEq, C: Seq<T> + ?Sized>(container: &C, value: &T) -> usize {
    seq::count(container.as_slice(), value)
}

/// Sorts the container, see [`unstable::sort`].
pub fn sort<T: Ord, C: SeqMut<T> + ?Sized>(container: &mut C) {
    unstable::sort(container.as_slice_mut());
}

/// Sorts the container with an `is_less` predicate, see [`unstable::sort_by`].
pub fn sort_by<T, C, F>(container: &mut C, is_less: F)
where
    C: SeqMut<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    unstable::sort_by(container.as_slice_mut(), is_less);
}

/// Sorts the container, preserving the order of equal elements.
pub fn stable_sort<T: Ord, C: SeqMut<T> + ?Sized>(container: &mut C) {
    stable::sort(container.as_slice_mut());
}

/// Stable sort with an `is_less` predicate, see [`stable::sort_by`].
pub fn stable_sort_by<T, C, F>(container: &mut C, is_less: F)
where
    C: SeqMut<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    stable::sort_by(container.as_slice_mut(), is_less);
}

/// Returns the index of the first element that is not less than `value`.
pub fn lower_bound<T: Ord, C: Seq<T> + ?Sized>(container: &C, value: &T) -> usize {
    search::lower_bound(container.as_slice(), value)
}

/// [`lower_bound`] with a custom `is_less` predicate.
pub fn lower_bound_by<T, C, F>(container: &C, value: &T, is_less: F) -> usize
where
    C: Seq<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    search::lower_bound_by(container.as_slice(), value, is_less)
}

/// Returns the index of the first element that is greater than `value`.
pub fn upper_bound<T: Ord, C: Seq<T> + ?Sized>(container: &C, value: &T) -> usize {
    search::upper_bound(container.as_slice(), value)
}

/// [`upper_bound`] with a custom `is_less` predicate.
pub fn upper_bound_by<T, C, F>(container: &C, value: &T, is_less: F) -> usize
where
    C: Seq<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    search::upper_bound_by(container.as_slice(), value, is_less)
}

/// Returns the index of an element equal to `value`, or the container length if there is none.
pub fn binary_find<T: Ord, C: Seq<T> + ?Sized>(container: &C, value: &T) -> usize {
    search::binary_find(container.as_slice(), value)
}

/// [`binary_find`] with a custom `is_less` predicate.
pub fn binary_find_by<T, C, F>(container: &C, value: &T, is_less: F) -> usize
where
    C: Seq<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    search::binary_find_by(container.as_slice(), value, is_less)
}
