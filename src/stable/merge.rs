//! TimSort over a permutation of indices.
//!
//! Runs are detected and merged on a `Vec<usize>` of positions into `v`, comparing the elements
//! in place. `v` itself is only touched once at the end, when the finished permutation is applied
//! with swaps. A panicking `is_less` therefore leaves `v` unchanged, and an `is_less` that is not
//! a strict weak ordering can only produce a wrong permutation, never a lost element.

/// Inserts some more elements into a run if it's shorter than this.
const MIN_INSERTION_RUN: usize = 10;

#[derive(Clone, Copy, Debug)]
struct TimSortRun {
    len: usize,
    start: usize,
}

/// Sorts `v` stably. Allocates `v.len()` indices for the permutation and at most
/// `v.len() / 2` indices of merge scratch space.
pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let mut perm = sorted_permutation(v, is_less);
    apply_permutation(v, &mut perm);
}

/// Returns `perm` such that `v[perm[0]], v[perm[1]], ..` is the stably sorted order of `v`.
fn sorted_permutation<T, F>(v: &[T], is_less: &mut F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let mut perm: Vec<usize> = (0..len).collect();
    let mut buf: Vec<usize> = Vec::with_capacity(len / 2);
    let mut runs: Vec<TimSortRun> = Vec::with_capacity(16);

    // Runs are identified back to front, so that merges mostly go forwards.
    let mut end = len;
    while end > 0 {
        // Find the next natural run, and reverse it if it's strictly descending.
        let start = find_streak_rev(v, &mut perm[..end], is_less);

        // Insertion sort is cheaper than merging on short sequences.
        let start = provide_sorted_batch(v, &mut perm, start, end, is_less);

        runs.push(TimSortRun {
            start,
            len: end - start,
        });
        end = start;

        // Merge some pairs of adjacent runs to satisfy the invariants.
        while let Some(r) = collapse(&runs) {
            let left = runs[r + 1];
            let right = runs[r];
            merge(
                v,
                &mut perm[left.start..right.start + right.len],
                left.len,
                &mut buf,
                is_less,
            );
            runs[r] = TimSortRun {
                start: left.start,
                len: left.len + right.len,
            };
            runs.remove(r + 1);
        }
    }

    // Finally, exactly one run must remain in the stack.
    debug_assert!(runs.len() == 1 && runs[0].start == 0 && runs[0].len == len);

    perm
}

/// Examines the stack of runs and identifies the next pair of runs to merge. If `Some(r)` is
/// returned, `runs[r]` and `runs[r + 1]` must be merged next. If the algorithm should continue
/// building a new run instead, `None` is returned.
///
/// The invariants are checked on the top four runs, three are not enough to keep them for every
/// run in the stack. A top run starting at index 0 always demands a merge, until the stack is
/// fully collapsed.
fn collapse(runs: &[TimSortRun]) -> Option<usize> {
    let n = runs.len();
    if n >= 2
        && (runs[n - 1].start == 0
            || runs[n - 2].len <= runs[n - 1].len
            || (n >= 3 && runs[n - 3].len <= runs[n - 2].len + runs[n - 1].len)
            || (n >= 4 && runs[n - 4].len <= runs[n - 3].len + runs[n - 2].len))
    {
        if n >= 3 && runs[n - 3].len < runs[n - 1].len {
            Some(n - 3)
        } else {
            Some(n - 2)
        }
    } else {
        None
    }
}

/// Finds the longest run ending at the end of `idx`, reversing it if it is strictly descending.
/// Returns the start of the run.
fn find_streak_rev<T, F>(v: &[T], idx: &mut [usize], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = idx.len();
    debug_assert!(len > 0);

    let mut start = len - 1;
    if start > 0 {
        start -= 1;
        if is_less(&v[idx[start + 1]], &v[idx[start]]) {
            while start > 0 && is_less(&v[idx[start]], &v[idx[start - 1]]) {
                start -= 1;
            }
            idx[start..len].reverse();
        } else {
            while start > 0 && !is_less(&v[idx[start]], &v[idx[start - 1]]) {
                start -= 1;
            }
        }
    }

    start
}

/// Extends the sorted run `idx[start..end]` to the left up to `MIN_INSERTION_RUN` elements.
/// Returns the new start.
fn provide_sorted_batch<T, F>(
    v: &[T],
    idx: &mut [usize],
    start: usize,
    end: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(end > start);

    if start == 0 || end - start >= MIN_INSERTION_RUN {
        return start;
    }

    let new_start = end.saturating_sub(MIN_INSERTION_RUN);
    for i in (new_start..start).rev() {
        insert_head(v, &mut idx[i..end], is_less);
    }

    new_start
}

/// Moves `idx[0]` right until `idx` is sorted, assuming `idx[1..]` already is. Equal elements
/// keep it in front of them.
fn insert_head<T, F>(v: &[T], idx: &mut [usize], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = 0;
    while i + 1 < idx.len() && is_less(&v[idx[i + 1]], &v[idx[i]]) {
        idx.swap(i, i + 1);
        i += 1;
    }
}

/// Merges the sorted runs `run[..mid]` and `run[mid..]`, copying the shorter one into `buf`.
/// Left elements win ties.
fn merge<T, F>(v: &[T], run: &mut [usize], mid: usize, buf: &mut Vec<usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = run.len();
    if mid == 0 || mid >= len {
        return;
    }

    buf.clear();

    if mid <= len - mid {
        // Left run is shorter, merge forwards.
        buf.extend_from_slice(&run[..mid]);

        let mut i = 0;
        let mut j = mid;
        let mut k = 0;
        while i < buf.len() && j < len {
            if is_less(&v[run[j]], &v[buf[i]]) {
                run[k] = run[j];
                j += 1;
            } else {
                run[k] = buf[i];
                i += 1;
            }
            k += 1;
        }

        let rest = buf.len() - i;
        run[k..k + rest].copy_from_slice(&buf[i..]);
    } else {
        // Right run is shorter, merge backwards.
        buf.extend_from_slice(&run[mid..]);

        let mut i = mid;
        let mut j = buf.len();
        let mut k = len;
        while i > 0 && j > 0 {
            k -= 1;
            if is_less(&v[buf[j - 1]], &v[run[i - 1]]) {
                run[k] = run[i - 1];
                i -= 1;
            } else {
                run[k] = buf[j - 1];
                j -= 1;
            }
        }

        run[..j].copy_from_slice(&buf[..j]);
    }
}

/// Rearranges `v` so that `v[i]` becomes the old `v[perm[i]]`, one cycle at a time.
///
/// `perm` is consumed as the visited marker, every processed position is set to point at itself.
fn apply_permutation<T>(v: &mut [T], perm: &mut [usize]) {
    debug_assert_eq!(v.len(), perm.len());

    for cycle_start in 0..perm.len() {
        let mut cur = cycle_start;
        loop {
            let next = core::mem::replace(&mut perm[cur], cur);
            if next == cycle_start {
                break;
            }

            v.swap(cur, next);
            cur = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_cycles() {
        let mut v = ['a', 'b', 'c', 'd', 'e'];
        let mut perm = [3, 0, 4, 1, 2];
        apply_permutation(&mut v, &mut perm);

        assert_eq!(v, ['d', 'a', 'e', 'b', 'c']);
        assert_eq!(perm, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn merge_both_directions() {
        let v = [1, 3, 5, 7, 9, 2, 4, 3, 3];
        let mut is_less = |a: &i32, b: &i32| a < b;
        let mut buf = Vec::new();

        // Shorter left run.
        let mut run = vec![7, 8, 0, 5, 1, 6, 2, 3, 4];
        merge(&v, &mut run, 2, &mut buf, &mut is_less);
        assert_eq!(run, [0, 5, 7, 8, 1, 6, 2, 3, 4]);

        // Shorter right run.
        let mut run = vec![0, 5, 1, 6, 2, 3, 4, 7, 8];
        merge(&v, &mut run, 7, &mut buf, &mut is_less);
        assert_eq!(run, [0, 5, 1, 7, 8, 6, 2, 3, 4]);
    }

    #[test]
    fn runs_stay_stable() {
        let v: Vec<(u8, usize)> = (0..500).map(|i| (((i * 31) % 7) as u8, i)).collect();
        let perm = sorted_permutation(v.as_slice(), &mut |a: &(u8, usize), b: &(u8, usize)| a.0 < b.0);

        let sorted: Vec<_> = perm.iter().map(|&i| v[i]).collect();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    }
}
