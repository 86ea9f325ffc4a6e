#![no_main]

use libfuzzer_sys::fuzz_target;

use mid_quicksort::unstable::rust_mid_quicksort as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    test_sort::sort(&mut v);

    assert!(v.windows(2).all(|w| w[0] <= w[1]));
});
