// Copyright (c) 2024-present, window-scan
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::sums::WindowSums;
use crate::Result;
use std::hash::Hash;
use std::ops::{Add, Sub};

/// An _extension trait_ for calling [`longest_unique_run`](crate::longest_unique_run)
/// in method position.
pub trait UniqueRunsExt<T> {
    /// Returns the length of the longest contiguous run of pairwise-distinct
    /// elements.
    fn longest_unique_run(&self) -> usize;
}

impl<T: Eq + Hash> UniqueRunsExt<T> for [T] {
    fn longest_unique_run(&self) -> usize {
        crate::unique::longest_unique_run(self)
    }
}

/// An _extension trait_ for calling [`window_sums`](crate::window_sums) in
/// method position.
pub trait WindowSumsExt<T> {
    /// Returns an iterator over the sums of all contiguous windows of exactly
    /// `size` elements.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidWindowLen`](crate::Error::InvalidWindowLen)
    /// if `size` is zero or exceeds the slice length.
    fn window_sums(&self, size: usize) -> Result<WindowSums<'_, T>>;
}

impl<T> WindowSumsExt<T> for [T]
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    fn window_sums(&self, size: usize) -> Result<WindowSums<'_, T>> {
        crate::sums::window_sums(self, size)
    }
}
