#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&value, rest)) = data.split_first() else {
        return;
    };

    let mut v = rest.to_vec();
    ordseq::sort(&mut v);

    let lower = ordseq::lower_bound(&v, &value);
    let upper = ordseq::upper_bound(&v, &value);
    assert_eq!(lower, v.partition_point(|&x| x < value));
    assert_eq!(upper, v.partition_point(|&x| x <= value));
    assert_eq!(ordseq::equal_range(&v, &value), lower..upper);

    let found = ordseq::binary_find(&v, &value);
    if lower == upper {
        assert_eq!(found, v.len());
    } else {
        assert_eq!(v[found], value);
    }

    // Unsorted input still yields in-bounds positions.
    assert!(ordseq::lower_bound(rest, &value) <= rest.len());
    assert!(ordseq::binary_find(rest, &value) <= rest.len());
});
