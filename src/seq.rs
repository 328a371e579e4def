//! Linear sequence operations: copying, filling, finding and counting.

use core::mem;
use core::ops::Range;

/// Clones `src` into the front of `dst` in forward order.
///
/// Returns the index one past the last written element of `dst`. The caller must provide a `dst`
/// of at least `src.len()` elements, if it doesn't only the common prefix is copied.
pub fn copy<T: Clone>(src: &[T], dst: &mut [T]) -> usize {
    debug_assert!(
        dst.len() >= src.len(),
        "copy destination is shorter than the source"
    );

    let len = src.len().min(dst.len());
    dst[..len].clone_from_slice(&src[..len]);

    len
}

/// Clones `src` into `dst[dst_end - src.len()..dst_end]`, starting with the last element.
///
/// Returns the index of the first written element of `dst`. Requires
/// `src.len() <= dst_end <= dst.len()`, otherwise the copy is limited to the part of `dst` that
/// can hold the tail of `src`.
pub fn copy_backward<T: Clone>(src: &[T], dst: &mut [T], dst_end: usize) -> usize {
    debug_assert!(dst_end <= dst.len(), "copy_backward end is out of bounds");
    debug_assert!(
        src.len() <= dst_end,
        "copy_backward destination can't hold the source"
    );

    let dst_end = dst_end.min(dst.len());
    let len = src.len().min(dst_end);
    let dst_begin = dst_end - len;

    for (d, s) in dst[dst_begin..dst_end]
        .iter_mut()
        .rev()
        .zip(src[src.len() - len..].iter().rev())
    {
        d.clone_from(s);
    }

    dst_begin
}

/// Forward copy of `v[src]` to `v[dst..]` where both ranges may overlap.
///
/// Overlap is only handled correctly if `dst <= src.start`. Returns the index one past the last
/// written element.
///
/// # Panics
///
/// Panics if `src` or the destination range are out of bounds.
pub fn copy_within<T: Clone>(v: &mut [T], src: Range<usize>, dst: usize) -> usize {
    assert!(src.start <= src.end && src.end <= v.len(), "source range out of bounds");
    let len = src.end - src.start;
    assert!(dst <= v.len() - len, "destination range out of bounds");
    debug_assert!(dst <= src.start || dst >= src.end, "forward copy would overwrite its source");

    for i in 0..len {
        let val = v[src.start + i].clone();
        v[dst + i] = val;
    }

    dst + len
}

/// Backward copy of `v[src]` so that it ends at `v[dst_end]`, both ranges may overlap.
///
/// This is the form to use when the destination lies ahead of the source. Returns the index of
/// the first written element.
///
/// # Panics
///
/// Panics if `src` or the destination range are out of bounds.
pub fn copy_backward_within<T: Clone>(v: &mut [T], src: Range<usize>, dst_end: usize) -> usize {
    assert!(src.start <= src.end && src.end <= v.len(), "source range out of bounds");
    let len = src.end - src.start;
    assert!(len <= dst_end && dst_end <= v.len(), "destination range out of bounds");

    let dst_begin = dst_end - len;
    debug_assert!(
        dst_begin >= src.start || dst_end <= src.start,
        "backward copy would overwrite its source"
    );

    for i in (0..len).rev() {
        let val = v[src.start + i].clone();
        v[dst_begin + i] = val;
    }

    dst_begin
}

/// Compares `a` against the first `a.len()` elements of `b`.
///
/// `b` must be at least as long as `a`. If it is shorter the sequences are reported as different.
pub fn equal<T, U>(a: &[T], b: &[U]) -> bool
where
    T: PartialEq<U>,
{
    debug_assert!(b.len() >= a.len(), "equal: second sequence is too short");

    if b.len() < a.len() {
        return false;
    }

    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Assigns `value` to every element of `v`.
#[inline]
pub fn fill<T: Clone>(v: &mut [T], value: T) {
    v.fill(value);
}

/// Returns the index of the first element equal to `value`, or `v.len()` if there is none.
pub fn find<T: PartialEq>(v: &[T], value: &T) -> usize {
    v.iter().position(|elem| elem == value).unwrap_or(v.len())
}

/// Returns the number of elements equal to `value`.
pub fn count<T: PartialEq>(v: &[T], value: &T) -> usize {
    v.iter().filter(|elem| *elem == value).count()
}

/// Exchanges the values behind `a` and `b`.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

/// Exchanges the elements at `a` and `b`. A no-op if both indices are the same.
///
/// # Panics
///
/// Panics if `a` or `b` are out of bounds.
#[inline]
pub fn swap_at<T>(v: &mut [T], a: usize, b: usize) {
    if a != b {
        v.swap(a, b);
    } else {
        assert!(a < v.len(), "swap_at index out of bounds");
    }
}
