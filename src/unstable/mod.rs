//! Unstable sorting.
//!
//! Introspective quicksort: quicksort with a bounded number of imbalanced partitions, falling
//! back to heapsort once that budget is spent, and insertion sort for small inputs. All element
//! moves are swaps, so a panicking comparison or one that violates the ordering leaves `v` a
//! permutation of its input, and any modification done through interior mutability during a
//! comparison stays observable.

mod heapsort;
mod pivot;
mod quicksort;
pub(crate) mod smallsort;

pub use heapsort::heapsort;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// ordseq::unstable::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with an `is_less` predicate, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// `is_less` must define a strict weak ordering for the elements in the slice. If it doesn't,
/// the resulting order is unspecified, but all original elements remain in the slice.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// ordseq::unstable::sort_by(&mut v, ordseq::less);
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// ordseq::unstable::sort_by(&mut v, ordseq::greater);
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    unstable_sort(v, is_less);
}

// --- IMPL ---

/// Inputs up to this length are sorted with insertion sort, without any other analysis.
const MAX_LEN_ALWAYS_INSERTION_SORT: usize = 20;

fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
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
        smallsort::insertion_sort_shift_left(v, 1, &mut is_less);
        return;
    }

    let (streak_end, was_reversed) = find_streak(v, &mut is_less);
    if streak_end == len {
        if was_reversed {
            v.reverse();
        }

        return;
    }

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    let limit = 2 * (len | 1).ilog2();

    quicksort::quicksort(v, &mut is_less, None, limit);
}

/// Finds a streak of presorted elements starting at the beginning of the slice. Returns the first
/// index that is not part of said streak, and a bool denoting whether the streak was reversed.
/// Streaks can be increasing or strictly decreasing.
fn find_streak<T, F>(v: &[T], is_less: &mut F) -> (usize, bool)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return (len, false);
    }

    let mut end = 2;

    let assume_reverse = is_less(&v[1], &v[0]);

    if assume_reverse {
        while end < len && is_less(&v[end], &v[end - 1]) {
            end += 1;
        }

        (end, true)
    } else {
        while end < len && !is_less(&v[end], &v[end - 1]) {
            end += 1;
        }

        (end, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_detection() {
        assert_eq!(find_streak(&[1, 2, 2, 3, 1], &mut |a: &i32, b: &i32| a < b), (4, false));
        assert_eq!(find_streak(&[5, 4, 3, 3], &mut |a: &i32, b: &i32| a < b), (3, true));
        assert_eq!(find_streak(&[1], &mut |a: &i32, b: &i32| a < b), (1, false));
    }

    #[test]
    fn descending_is_linear() {
        let mut v: Vec<i32> = (0..10_000).rev().collect();
        let mut comps = 0usize;
        sort_by(&mut v, |a, b| {
            comps += 1;
            a < b
        });

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert!(comps < 10_000, "{comps}");
    }
}
