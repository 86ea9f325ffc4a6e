#![no_main]

use libfuzzer_sys::fuzz_target;

use mid_quicksort::unstable::rust_mid_quicksort as test_sort;

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    // The first byte drives the comparison, which is allowed to violate a total order.
    let Some((&cmp_seed, rest)) = data.split_first() else {
        return;
    };

    let mut v = util::u8_as_i32(rest);
    let mut expected = v.clone();
    expected.sort_unstable();

    let mut state = cmp_seed;
    test_sort::sort_by(&mut v, |a, b| {
        state = state.rotate_left(3) ^ 0x5a;
        if state & 0x80 == 0 {
            a.cmp(b)
        } else {
            b.cmp(a)
        }
    });

    // Whatever the comparison did, no element may be lost or duplicated.
    v.sort_unstable();
    assert_eq!(v, expected);
});
