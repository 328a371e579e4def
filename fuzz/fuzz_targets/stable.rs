#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Sort on the high nibble only, the index records the original order.
    let mut v: Vec<(u8, usize)> = data.iter().map(|&b| b >> 4).zip(0..).collect();
    ordseq::stable_sort_by(&mut v, |a, b| a.0 < b.0);

    assert!(v.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(v.len(), data.len());
});
