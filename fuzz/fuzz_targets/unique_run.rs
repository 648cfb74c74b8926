#![no_main]
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};
use window_scan::longest_unique_run;

fn naive(seq: &[u8]) -> usize {
    (0..seq.len())
        .map(|start| {
            let mut seen = std::collections::HashSet::new();
            seq[start..].iter().take_while(|x| seen.insert(**x)).count()
        })
        .max()
        .unwrap_or(0)
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok(items) = <Vec<u8> as Arbitrary>::arbitrary(&mut unstructured) {
        let run = longest_unique_run(&items);
        assert_eq!(naive(&items), run);
        assert!(run <= items.len());
    }
});
