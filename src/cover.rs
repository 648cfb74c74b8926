// Copyright (c) 2024-present, window-scan
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{HashMap, Span};
use std::hash::Hash;

/// Returns the shortest contiguous run of `source` that contains at least as
/// many of each element as `target` does (a supermultiset of `target`).
///
/// Duplicate elements in `target` must all be present in the window at the
/// same time: a target of `[a, a, b]` is only covered by windows holding two
/// `a`s.
///
/// Returns `None` when no covering run exists, when `source` is shorter than
/// `target`, or when `target` is empty (an empty requirement is treated as
/// not-found rather than as a zero-length match).
///
/// Amortized _O(|source| + |target|)_: both window bounds only ever move
/// forward.
///
/// # Examples
///
/// ```
/// use window_scan::{min_cover, Span};
///
/// let source = "ADOBECODEBANC".as_bytes();
///
/// assert_eq!(Some(Span::new(9, 13)), min_cover(source, b"ABC"));
/// assert_eq!(None, min_cover(source, b"AXC"));
/// ```
#[must_use]
pub fn min_cover<T: Eq + Hash>(source: &[T], target: &[T]) -> Option<Span> {
    if target.is_empty() || source.len() < target.len() {
        return None;
    }

    // remaining need per target element; negative means the window holds surplus copies
    let mut need: HashMap<&T, i64> = HashMap::default();

    for item in target {
        *need.entry(item).or_default() += 1;
    }

    // Target elements, counted with multiplicity, the window does not hold yet
    let mut outstanding = target.len();

    let mut best: Option<Span> = None;
    let mut left = 0;

    for (right, item) in source.iter().enumerate() {
        if let Some(n) = need.get_mut(item) {
            *n -= 1;

            // NOTE: only an entering element that services an open need
            // shrinks the deficit; surplus copies leave it untouched
            if *n >= 0 {
                outstanding -= 1;
            }
        }

        // Window covers the target, shrink it from the left while it keeps covering
        while outstanding == 0 {
            let len = (right + 1) - left;

            if best.is_none_or(|span| len < span.len()) {
                log::trace!("new best covering window [{left}..{}]", right + 1);
                best = Some(Span::new(left, right + 1));
            }

            let leaving = source.get(left).expect("left trails right");

            if let Some(n) = need.get_mut(leaving) {
                *n += 1;

                // need crossed back above zero, coverage is lost
                if *n > 0 {
                    outstanding += 1;
                }
            }

            left += 1;
        }
    }

    best
}

/// [`min_cover`] over the `char`s of string slices, returning the matched
/// substring of `source`.
///
/// # Examples
///
/// ```
/// use window_scan::min_cover_str;
///
/// assert_eq!(Some("BANC"), min_cover_str("ADOBECODEBANC", "ABC"));
/// ```
#[must_use]
pub fn min_cover_str<'a>(source: &'a str, target: &str) -> Option<&'a str> {
    let source_chars = source.chars().collect::<Vec<_>>();
    let target_chars = target.chars().collect::<Vec<_>>();

    let span = min_cover(&source_chars, &target_chars)?;

    // The span is in char positions, map it back to byte offsets
    let byte_at = |pos: usize| {
        source
            .char_indices()
            .nth(pos)
            .map_or(source.len(), |(at, _)| at)
    };

    source.get(byte_at(span.start())..byte_at(span.end()))
}
