#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    ordseq::sort(&mut v);

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(v, expected);

    // An inconsistent predicate must neither hang nor lose elements.
    let mut flip = false;
    let mut w = data.to_vec();
    ordseq::sort_by(&mut w, |a, b| {
        flip = !flip;
        flip ^ (a < b)
    });
    w.sort();
    assert_eq!(w, expected);
});
