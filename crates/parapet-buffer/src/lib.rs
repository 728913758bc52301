// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wipe-on-drop byte buffers for cryptographic material.
//!
//! [`CryptoBuffer`] owns a fixed-length heap allocation that is erased
//! through [`parapet_zero`]'s compile-time selected wipe primitive before
//! the storage is released, on every exit path. Ordinary `Vec<u8>` gives
//! no such guarantee: a plain zero fill before drop is a dead store the
//! optimizer is free to remove.
//!
//! # Design
//!
//! - Fixed length: allocated once, never grows or reallocates
//! - Exclusive ownership: no `Clone`; duplication is explicit
//!   ([`CryptoBuffer::try_clone`]), transfer empties the source
//!   ([`CryptoBuffer::take`])
//! - Chunking copies, never aliases: every chunk erases itself
//!   independently at its own end of life
//! - Bounds-checked `get`/`set`, with a raw-pointer escape hatch for
//!   whole-buffer cipher primitives
//!
//! # Example
//!
//! ```rust
//! use parapet_buffer::{BufferError, CryptoBuffer};
//! use parapet_zero::Wipe;
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut block = CryptoBuffer::from_slice(&[0x01, 0x02, 0x03, 0x04])?;
//!     let keystream = CryptoBuffer::from_slice(&[0xFF, 0xFF])?;
//!
//!     // XOR over the overlapping prefix; trailing bytes untouched
//!     block.xor(&keystream);
//!     assert_eq!(block.as_slice(), &[0xFE, 0xFD, 0x03, 0x04]);
//!
//!     // Chunk into independently owned pieces
//!     let chunks = block.try_chunks(3)?;
//!     assert_eq!(chunks.len(), 2);
//!     assert_eq!(chunks[1].len(), 1);
//!
//!     // Erase early, without waiting for drop
//!     block.wipe();
//!     assert!(block.iter().all(|&b| b == 0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod crypto_buffer;
mod error;

pub use crypto_buffer::CryptoBuffer;
pub use error::BufferError;
