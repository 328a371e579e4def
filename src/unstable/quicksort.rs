use super::heapsort::heapsort;
use super::pivot::choose_pivot;
use super::smallsort::{insertion_sort_shift_left, SMALL_SORT_THRESHOLD};

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, it is specified as `ancestor_pivot`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heapsort`. If zero,
/// this function will immediately switch to heapsort. Each recursion level consumes one unit of
/// `limit`, which also bounds the recursion depth.
pub(crate) fn quicksort<'a, T, F>(
    mut v: &'a mut [T],
    is_less: &mut F,
    mut ancestor_pivot: Option<&'a T>,
    mut limit: u32,
) where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= SMALL_SORT_THRESHOLD {
            if v.len() >= 2 {
                insertion_sort_shift_left(v, 1, is_less);
            }
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            heapsort(v, is_less);
            return;
        }

        limit -= 1;

        let pivot_pos = choose_pivot(v, is_less);

        // If the chosen pivot is equal to the predecessor, then it's the smallest element in the
        // slice. Partition the slice into elements equal to and elements greater than the pivot.
        // This case is usually hit when the slice contains many duplicate elements.
        if let Some(p) = ancestor_pivot {
            if !is_less(p, &v[pivot_pos]) {
                let mid = partition(v, pivot_pos, &mut |a: &T, b: &T| !is_less(b, a));

                // Continue sorting elements greater than the pivot. We know that mid contains the
                // pivot. So we can continue after mid.
                v = &mut v[(mid + 1)..];
                ancestor_pivot = None;
                continue;
            }
        }

        let mid = partition(v, pivot_pos, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let (pivot, right) = right.split_at_mut(1);
        let pivot = &pivot[0];

        // Recurse into the left side, continue with the right side.
        quicksort(left, is_less, ancestor_pivot, limit);

        v = right;
        ancestor_pivot = Some(pivot);
    }
}

/// Takes the input slice `v` and re-arranges elements such that when the call returns normally
/// all elements that compare true for `is_less(elem, pivot)` where `pivot == v[pivot_pos]` are
/// on the left side of `v`, followed by the pivot, followed by the other elements, notionally
/// considered greater or equal to `pivot`.
///
/// Returns the final position of the pivot, which is also the number of elements that compared
/// true for `is_less(elem, pivot)`.
///
/// If `is_less` does not implement a strict weak order the resulting order and return value are
/// unspecified, but the return value is always in-bounds and all original elements remain in `v`.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len == 0 {
        return 0;
    }

    // Place the pivot at the beginning of slice.
    v.swap(0, pivot_pos);
    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    // Hoare style scan from both ends.
    // Invariant: rest[..l] are less than the pivot and rest[r..] are not.
    let mut l = 0;
    let mut r = rest.len();

    loop {
        while l < r && is_less(&rest[l], pivot) {
            l += 1;
        }

        while l < r && !is_less(&rest[r - 1], pivot) {
            r -= 1;
        }

        if l >= r {
            break;
        }

        // rest[l] is not less than the pivot, rest[r - 1] is.
        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    let num_lt = l;

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);

    num_lt
}
