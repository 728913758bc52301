// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secure erasure primitives with compile-time platform selection.
//!
//! Plain `memset`-style zero fills are dead stores to an optimizing
//! compiler: if the buffer is never read again, the fill is removed and
//! the secret stays resident in freed memory. This crate routes every
//! erase through a primitive the optimizer cannot elide, picked once per
//! target at compile time:
//!
//! 1. `memset_s` on Apple libc
//! 2. `explicit_bzero` where the libc provides it (Linux, Android,
//!    FreeBSD, OpenBSD, DragonFly)
//! 3. A portable fallback: `write_bytes` followed by a volatile read and
//!    a compiler fence, so the store stays observable
//!
//! Callers never pick a tier. They call [`wipe_bytes`] or [`wipe_vec`]
//! and get the strongest primitive available for the target. Wiping
//! cannot fail: tier selection degrades in strength, never in coverage.
//!
//! # Example
//!
//! ```rust
//! use parapet_zero::{is_slice_wiped, wipe_bytes};
//!
//! let mut key = [0x42u8; 32];
//! wipe_bytes(&mut key);
//! assert!(is_slice_wiped(&key));
//! ```
//!
//! # Drop verification
//!
//! [`WipeOnDropSentinel`] and [`assert_wipe_on_drop`] let tests verify
//! from the outside that a value wiped itself before it was dropped:
//!
//! ```rust
//! use parapet_zero::{AssertWipeOnDrop, Wipe, WipeOnDropSentinel, assert_wipe_on_drop};
//!
//! struct Key {
//!     material: Vec<u8>,
//!     __sentinel: WipeOnDropSentinel,
//! }
//!
//! impl Wipe for Key {
//!     fn wipe(&mut self) {
//!         self.material.wipe();
//!         self.__sentinel.wipe();
//!     }
//! }
//!
//! impl Drop for Key {
//!     fn drop(&mut self) {
//!         self.wipe();
//!     }
//! }
//!
//! impl AssertWipeOnDrop for Key {
//!     fn clone_sentinel(&self) -> WipeOnDropSentinel {
//!         self.__sentinel.clone()
//!     }
//!
//!     fn assert_wipe_on_drop(self) {
//!         assert_wipe_on_drop(self);
//!     }
//! }
//!
//! let key = Key {
//!     material: vec![0xAB; 16],
//!     __sentinel: WipeOnDropSentinel::default(),
//! };
//! key.assert_wipe_on_drop();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod impls;
mod sentinel;
mod traits;
mod wipe;

pub use assert::assert_wipe_on_drop;
pub use sentinel::WipeOnDropSentinel;
pub use traits::{AssertWipeOnDrop, Wipe, WipeProbe};
pub use wipe::{is_slice_wiped, is_vec_fully_wiped, wipe_bytes, wipe_vec};
