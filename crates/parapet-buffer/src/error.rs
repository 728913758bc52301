// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-buffer.

use thiserror::Error;

/// Errors that can occur when working with [`CryptoBuffer`](crate::CryptoBuffer).
///
/// Every variant reports structural misuse at the call that triggered it.
/// Wiping has no variant: erasure degrades in strength per platform but
/// is never skipped, so it cannot fail observably.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// Storage for the requested number of bytes could not be obtained.
    #[error("allocation of {requested} bytes failed")]
    Allocation {
        /// Bytes requested from the allocator.
        requested: usize,
    },

    /// Indexed access past the end of the buffer.
    #[error("index {index} out of range for buffer of length {len}")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Buffer length at the time of access.
        len: usize,
    },

    /// Chunk size outside `1..=len`.
    #[error("invalid chunk size {chunk_size} for buffer of length {len}")]
    InvalidChunkSize {
        /// Requested chunk size.
        chunk_size: usize,
        /// Buffer length at the time of the call.
        len: usize,
    },
}
