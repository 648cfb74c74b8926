// Copyright (c) 2024-present, window-scan
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A K.I.S.S. library of two-pointer sliding window scans over slices and strings.
//!
//! ##### About
//!
//! This crate exports a small set of pure, amortized-linear scans that all share
//! one structural pattern: a half-open window `[left, right)` is pushed across
//! the input, `right` advancing one element at a time, `left` catching up while
//! some window condition demands it, and a per-window aggregate (a membership
//! set, a running sum, a need map) maintained incrementally instead of being
//! recomputed per window.
//!
//! Three scans are provided:
//!
//! - [`longest_unique_run`] — length of the longest contiguous run without a
//!   repeated element.
//! - [`window_sums`] — lazy iterator over the sums of all fixed-size windows,
//!   with [`max_window_sum`] and [`min_window_sum`] riding on top.
//! - [`min_cover`] — shortest contiguous run of a source that contains at least
//!   the multiset of elements required by a target.
//!
//! All state is function-local; every scan is re-entrant and returns the same
//! result for the same input.

#![doc(html_logo_url = "https://raw.githubusercontent.com/window-scan/window-scan/main/logo.png")]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/window-scan/window-scan/main/logo.png")]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]
#![warn(clippy::redundant_feature_names)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[doc(hidden)]
pub type HashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

pub(crate) type HashSet<K> = std::collections::HashSet<K, rustc_hash::FxBuildHasher>;

mod cover;
mod error;
mod ext;
mod span;
mod sums;
mod unique;

pub use {
    cover::{min_cover, min_cover_str},
    error::{Error, Result},
    ext::{UniqueRunsExt, WindowSumsExt},
    span::Span,
    sums::{max_window_sum, min_window_sum, window_sums, WindowSums},
    unique::{longest_unique_run, longest_unique_substr},
};
