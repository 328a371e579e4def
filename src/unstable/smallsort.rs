/// Partitions shorter than this are finished with insertion sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 20;

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// Never inline this function to avoid code bloat. It still optimizes nicely and has practically
/// no performance impact.
#[inline(never)]
pub(crate) fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Using assert here improves performance.
    assert!(offset != 0 && offset <= len);

    // Shift each element of the unsorted region v[i..] as far left as is needed to make v sorted.
    for i in offset..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
///
/// Moves happen one swap at a time, so the element being inserted is always part of `v`, even if
/// `is_less` panics.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = v.len() - 1;

    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i, i - 1);
        i -= 1;
    }
}
