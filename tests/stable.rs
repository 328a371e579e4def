use sort_test_tools::{instantiate_sort_tests, Sort};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "ordseq_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        ordseq::stable_sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        ordseq::stable_sort_by(arr, is_less);
    }
}

instantiate_sort_tests!(SortImpl);

#[test]
fn equal_keys_keep_order() {
    let mut v = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
    ordseq::stable_sort_by(&mut v, |a, b| a.0 < b.0);

    assert_eq!(v, [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
}

#[test]
fn random_predicate_returns_normally() {
    // Both sorts must return for a predicate answering with random bits, and keep every element.
    for round in 0..50 {
        let input = sort_test_tools::patterns::random(2_000);
        let coin = sort_test_tools::patterns::random_uniform(4_096, 0..=1);

        let mut expected = input.clone();
        expected.sort();

        let mut flips = coin.iter().cycle().skip(round);
        let mut stable = input.clone();
        let stable_res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            ordseq::stable_sort_by(&mut stable, |_, _| flips.next() == Some(&1));
        }));
        assert!(stable_res.is_ok(), "stable_sort_by panicked in round {round}");

        let mut flips = coin.iter().cycle().skip(round);
        let mut unstable = input.clone();
        let unstable_res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            ordseq::sort_by(&mut unstable, |_, _| flips.next() == Some(&1));
        }));
        assert!(unstable_res.is_ok(), "sort_by panicked in round {round}");

        stable.sort();
        unstable.sort();
        assert_eq!(stable, expected);
        assert_eq!(unstable, expected);
    }
}

#[test]
fn inconsistent_ord_returns_normally() {
    // An Ord impl that disagrees with itself depending on call order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Flaky(i32);

    impl PartialOrd for Flaky {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Flaky {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            if (self.0 ^ other.0) & 4 == 0 {
                self.0.cmp(&other.0)
            } else {
                other.0.cmp(&self.0)
            }
        }
    }

    let mut v: Vec<Flaky> = sort_test_tools::patterns::random_uniform(5_000, 0..64)
        .into_iter()
        .map(Flaky)
        .collect();
    let mut expected: Vec<i32> = v.iter().map(|f| f.0).collect();
    expected.sort();

    ordseq::stable_sort(&mut v);

    let mut got: Vec<i32> = v.iter().map(|f| f.0).collect();
    got.sort();
    assert_eq!(got, expected);
}
