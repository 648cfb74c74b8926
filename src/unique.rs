// Copyright (c) 2024-present, window-scan
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::HashSet;
use std::hash::Hash;

/// Returns the length of the longest contiguous run of pairwise-distinct elements.
///
/// Single forward pass: the window grows at `right`, and whenever the entering
/// element is already present, elements are evicted at `left` until the stale
/// occurrence is gone. Each element enters and leaves the membership set at
/// most once, so the scan is amortized _O(n)_.
///
/// Returns 0 for an empty slice.
///
/// # Examples
///
/// ```
/// use window_scan::longest_unique_run;
///
/// assert_eq!(3, longest_unique_run(b"abcabcbb"));
/// assert_eq!(1, longest_unique_run(&[7, 7, 7]));
/// ```
#[must_use]
pub fn longest_unique_run<T: Eq + Hash>(seq: &[T]) -> usize {
    let mut seen: HashSet<&T> = HashSet::default();
    let mut left = 0;
    let mut max_len = 0;

    for (right, item) in seq.iter().enumerate() {
        // Evict from the left until the stale occurrence of `item` is gone
        while seen.contains(item) {
            let evicted = seq.get(left).expect("left trails right");
            seen.remove(evicted);
            left += 1;
        }

        seen.insert(item);
        max_len = max_len.max(right - left + 1);
    }

    max_len
}

/// [`longest_unique_run`] over the `char`s of a string slice.
///
/// Operates on Unicode scalar values, not bytes, so multi-byte characters
/// count as single elements.
#[must_use]
pub fn longest_unique_substr(s: &str) -> usize {
    let chars = s.chars().collect::<Vec<_>>();
    longest_unique_run(&chars)
}

#[cfg(test)]
mod tests {
    use super::{longest_unique_run, longest_unique_substr};
    use test_log::test;

    #[test]
    fn unique_run_empty() {
        assert_eq!(0, longest_unique_substr(""));
        assert_eq!(0, longest_unique_run::<u64>(&[]));
    }

    #[test]
    fn unique_run_repeating() {
        assert_eq!(3, longest_unique_substr("abcabcbb"));
    }

    #[test]
    fn unique_run_all_same() {
        assert_eq!(1, longest_unique_substr("bbbbb"));
    }

    #[test]
    fn unique_run_overlap() {
        // the answer is "wke", not "pwke"
        assert_eq!(3, longest_unique_substr("pwwkew"));
    }

    #[test]
    fn unique_run_all_distinct() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(items.len(), longest_unique_run(&items));
    }

    #[test]
    fn unique_run_integers() {
        assert_eq!(4, longest_unique_run(&[1, 2, 1, 3, 4, 2, 2]));
    }

    #[test]
    fn unique_run_multibyte() {
        assert_eq!(3, longest_unique_substr("äöüäöü"));
    }
}
