use sort_test_tools::patterns;

use ordseq::container;

#[test]
fn copy_then_equal() {
    for len in [0, 1, 7, 100, 1_000] {
        let src = patterns::random(len);
        let mut dst = vec![0; len + 3];

        let end = ordseq::copy(&src, &mut dst);
        assert_eq!(end, len);
        assert!(ordseq::equal(&src, &dst));
        assert_eq!(&dst[len..], &[0, 0, 0]);
    }
}

#[test]
fn copy_backward_then_equal() {
    let src = patterns::random(50);
    let mut dst = vec![0; 60];

    let begin = ordseq::copy_backward(&src, &mut dst, 55);
    assert_eq!(begin, 5);
    assert!(ordseq::equal(&src, &dst[begin..]));
    assert!(dst[..5].iter().chain(&dst[55..]).all(|&x| x == 0));
}

#[test]
fn copy_empty() {
    let src: [String; 0] = [];
    let mut dst = vec![String::from("keep")];

    assert_eq!(ordseq::copy(&src, &mut dst), 0);
    assert_eq!(ordseq::copy_backward(&src, &mut dst, 1), 1);
    assert_eq!(dst, ["keep"]);
}

#[test]
fn shift_right_by_overlapping_copy() {
    let mut v = patterns::ascending(20);
    let begin = ordseq::copy_backward_within(&mut v, 0..15, 20);

    assert_eq!(begin, 5);
    assert_eq!(&v[5..], &patterns::ascending(15)[..]);
}

#[test]
fn equal_mixed_types() {
    let a = ["a", "b"];
    let b = [String::from("a"), String::from("b"), String::from("c")];

    assert!(ordseq::equal(&a, &b));
    assert!(!ordseq::equal(&["a", "x"], &b));
    assert!(ordseq::equal::<&str, String>(&[], &[]));
}

#[test]
fn fill_then_count() {
    let mut v = patterns::random(333);
    ordseq::fill(&mut v, 9);

    assert_eq!(ordseq::count(&v, &9), 333);
    assert_eq!(ordseq::count(&v, &8), 0);

    let mut empty: [i32; 0] = [];
    ordseq::fill(&mut empty, 1);
}

#[test]
fn find_first_match() {
    let v = [4, 1, 5, 1, 9];

    assert_eq!(ordseq::find(&v, &1), 1);
    assert_eq!(ordseq::find(&v, &9), 4);
    assert_eq!(ordseq::find(&v, &7), v.len());
    assert_eq!(ordseq::find::<i32>(&[], &7), 0);
}

#[test]
fn find_and_count_agree() {
    let v = patterns::random_uniform(1_000, 0..16);

    for value in 0..16 {
        let pos = ordseq::find(&v, &value);
        let count = ordseq::count(&v, &value);

        assert_eq!(pos == v.len(), count == 0);
        if pos < v.len() {
            assert_eq!(v[pos], value);
            assert!(v[..pos].iter().all(|&x| x != value));
        }
    }
}

#[test]
fn scenario() {
    let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(ordseq::count(&v, &5), 2);
    assert_eq!(ordseq::find(&v, &4), 3);

    ordseq::sort(&mut v);
    assert_eq!(v, [1, 1, 2, 3, 4, 5, 5, 6, 9]);
    assert_eq!(ordseq::lower_bound(&v, &5), 5);
    assert_eq!(ordseq::upper_bound(&v, &5), 7);
    assert_eq!(ordseq::binary_find(&v, &7), v.len());

    assert_eq!(ordseq::clamp(1, 0, 3), 1);
    assert_eq!(ordseq::clamp(1, 5, 3), 3);
    assert_eq!(ordseq::clamp(1, 2, 3), 2);
}

#[test]
fn clamp_stays_in_bounds() {
    let vals = patterns::random(200);

    for pair in vals.chunks_exact(2) {
        let (min, max) = (pair[0].min(pair[1]), pair[0].max(pair[1]));

        for value in patterns::random_uniform(10, min..=max) {
            assert_eq!(ordseq::clamp(min, value, max), value);
        }
        assert_eq!(ordseq::clamp(min, i32::MIN, max), min);
        assert_eq!(ordseq::clamp(min, i32::MAX, max), max);
        assert_eq!(ordseq::checked_clamp(max, 0, min).is_err(), min < max);
    }
}

#[test]
fn clamp_returns_argument() {
    // The result is one of the arguments, moved out rather than recomputed.
    let min = String::from("b");
    let max = String::from("d");

    assert_eq!(ordseq::clamp(min.clone(), String::from("a"), max.clone()), "b");
    assert_eq!(ordseq::clamp(min.clone(), String::from("c"), max.clone()), "c");
    assert_eq!(ordseq::clamp(min, String::from("z"), max), "d");
}

#[test]
fn swap_values() {
    let mut a = vec![1, 2];
    let mut b = vec![3];
    ordseq::swap(&mut a, &mut b);

    assert_eq!(a, [3]);
    assert_eq!(b, [1, 2]);
}

#[test]
fn container_sort_and_search() {
    let mut v = patterns::random_uniform(500, 0..50);
    container::sort(&mut v);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));

    for value in 0..50 {
        let lower = container::lower_bound(&v, &value);
        let upper = container::upper_bound(&v, &value);

        assert_eq!(upper - lower, container::count(&v, &value));
        assert_eq!(container::binary_find(&v, &value) == v.len(), lower == upper);
    }

    let mut pairs: Vec<(i32, usize)> = patterns::random_uniform(300, 0..8)
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect();
    container::stable_sort_by(&mut pairs, |a, b| a.0 < b.0);
    assert!(pairs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn container_descending() {
    let mut arr = [3, 9, 1, 7, 5];
    container::sort_by(&mut arr, ordseq::greater);
    assert_eq!(arr, [9, 7, 5, 3, 1]);

    assert_eq!(container::lower_bound_by(&arr, &7, ordseq::greater), 1);
    assert_eq!(container::upper_bound_by(&arr, &7, ordseq::greater), 2);
    assert_eq!(container::binary_find_by(&arr, &4, ordseq::greater), arr.len());

    let slice: &mut [i32] = &mut arr;
    container::fill(slice, 0);
    assert_eq!(container::find(&arr, &0), 0);
}
