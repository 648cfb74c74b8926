// Copyright (c) 2024-present, window-scan
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur when setting up a window scan
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested window size is zero or longer than the scanned sequence
    /// (sequence length, requested window size)
    InvalidWindowLen {
        /// Length of the scanned sequence
        len: usize,

        /// Requested window size
        size: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WindowScanError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Window scan result
pub type Result<T> = std::result::Result<T, Error>;
