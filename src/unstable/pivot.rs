/// Minimum length to choose the median-of-medians (ninther) method.
/// Shorter slices use the simple median-of-three method.
const SHORTEST_NINTHER: usize = 50;

/// Chooses a pivot in `v` and returns its index.
///
/// Three sample positions at a quarter, half and three quarters of the slice are used. For slices
/// of at least `SHORTEST_NINTHER` elements each sample is first replaced by the median of its
/// neighborhood, which gives Tukey's ninther. Does not reorder `v`.
pub(crate) fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // It's a logic bug if this gets called on a slice that would be small-sorted.
    debug_assert!(len >= 8);
    if len < 8 {
        return 0;
    }

    let len_div_4 = len / 4;
    let a = len_div_4;
    let b = len_div_4 * 2;
    let c = len_div_4 * 3;

    if len >= SHORTEST_NINTHER {
        // len_div_4 >= 12, so all neighborhoods are in-bounds and disjoint.
        let a = median3(v, a - 1, a, a + 1, is_less);
        let b = median3(v, b - 1, b, b + 1, is_less);
        let c = median3(v, c - 1, c, c + 1, is_less);

        median3(v, a, b, c, is_less)
    } else {
        median3(v, a, b, c, is_less)
    }
}

/// Returns the index of the median of `v[a]`, `v[b]` and `v[c]`.
fn median3<T, F>(v: &[T], mut a: usize, mut b: usize, mut c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorts the indices so that `v[a] <= v[b] <= v[c]`.
    let mut sort2_idx = |a: &mut usize, b: &mut usize| {
        if is_less(&v[*b], &v[*a]) {
            core::mem::swap(a, b);
        }
    };

    sort2_idx(&mut a, &mut b);
    sort2_idx(&mut b, &mut c);
    sort2_idx(&mut a, &mut b);

    b
}
