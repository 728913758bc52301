// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # Parapet
//!
//! Wipe-on-drop byte buffers for cryptographic material.
//!
//! Parapet is the memory primitive underneath key handling: a
//! fixed-length owned byte buffer whose storage is erased, through a
//! platform primitive the optimizer cannot elide, before it is ever
//! released. Chunking and in-place XOR cover the streaming-cipher and
//! keystream shapes without giving up the erasure guarantee.
//!
//! This is a re-export crate combining [`parapet-buffer`] and
//! [`parapet-zero`] for convenience.
//!
//! # Quick Start
//!
//! ```rust
//! use parapet::{BufferError, CryptoBuffer, Wipe};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut block = CryptoBuffer::from_slice(b"attack at dawn")?;
//!     let keystream = CryptoBuffer::new(block.len())?;
//!
//!     block.xor(&keystream); // apply keystream in place
//!
//!     for piece in block.try_chunks(4)? {
//!         // each piece owns its bytes and wipes them at its own drop
//!         let _ = piece.len();
//!     }
//!
//!     block.wipe(); // erase early, without waiting for drop
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # What's Included
//!
//! - **Buffer**: [`CryptoBuffer`], [`BufferError`]
//! - **Wiping**: [`wipe_bytes`], [`wipe_vec`] and the [`Wipe`],
//!   [`WipeProbe`], [`AssertWipeOnDrop`] traits
//! - **Drop verification**: [`WipeOnDropSentinel`],
//!   [`assert_wipe_on_drop`]
//!
//! [`parapet-buffer`]: parapet_buffer
//! [`parapet-zero`]: parapet_zero

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

/// Buffer types.
pub mod buffer {
    pub use parapet_buffer::{BufferError, CryptoBuffer};
}

/// Wipe primitives, probes, and drop sentinels.
pub mod zero {
    pub use parapet_zero::{
        AssertWipeOnDrop, Wipe, WipeOnDropSentinel, WipeProbe, assert_wipe_on_drop,
        is_slice_wiped, is_vec_fully_wiped, wipe_bytes, wipe_vec,
    };
}

pub use parapet_buffer::{BufferError, CryptoBuffer};
pub use parapet_zero::{
    AssertWipeOnDrop, Wipe, WipeOnDropSentinel, WipeProbe, assert_wipe_on_drop, is_slice_wiped,
    is_vec_fully_wiped, wipe_bytes, wipe_vec,
};
