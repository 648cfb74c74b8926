#![no_main]
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};
use window_scan::window_sums;

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok(items) = <Vec<i32> as Arbitrary>::arbitrary(&mut unstructured) {
        // widen so no window sum can overflow
        let items = items.into_iter().map(i64::from).collect::<Vec<_>>();

        let Ok(size) = <usize as Arbitrary>::arbitrary(&mut unstructured) else {
            return;
        };
        let size = size % (items.len() + 1);

        let Ok(sums) = window_sums(&items, size) else {
            assert!(size == 0 || size > items.len());
            return;
        };

        let rescanned = items
            .windows(size)
            .map(|w| w.iter().sum::<i64>())
            .collect::<Vec<_>>();

        assert_eq!(rescanned, sums.collect::<Vec<_>>());
    }
});
