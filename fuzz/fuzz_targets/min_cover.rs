#![no_main]
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};
use window_scan::min_cover;

fn covers(window: &[u8], target: &[u8]) -> bool {
    let mut need = std::collections::HashMap::new();

    for &c in target {
        *need.entry(c).or_insert(0i64) += 1;
    }
    for &c in window {
        if let Some(n) = need.get_mut(&c) {
            *n -= 1;
        }
    }

    need.values().all(|&n| n <= 0)
}

fn naive(source: &[u8], target: &[u8]) -> Option<usize> {
    if target.is_empty() {
        return None;
    }

    (0..source.len())
        .filter_map(|start| {
            ((start + 1)..=source.len())
                .find(|&end| covers(&source[start..end], target))
                .map(|end| end - start)
        })
        .min()
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    let Ok(mut source) = <Vec<u8> as Arbitrary>::arbitrary(&mut unstructured) else {
        return;
    };
    let Ok(mut target) = <Vec<u8> as Arbitrary>::arbitrary(&mut unstructured) else {
        return;
    };

    // keep the quadratic oracle affordable
    source.truncate(64);
    target.truncate(8);

    let got = min_cover(&source, &target);
    assert_eq!(naive(&source, &target), got.map(|span| span.len()));

    if let Some(span) = got {
        let window = span.slice_of(&source).unwrap();
        assert!(covers(window, &target));
    }
});
