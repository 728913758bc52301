// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic wiping.

use super::sentinel::WipeOnDropSentinel;

/// Trait for values that can erase their sensitive contents in place.
///
/// After `wipe()` returns, no sensitive byte of the value remains
/// readable in memory. Wiping an already-wiped or empty value is a
/// no-op, never an error. The trait is dyn-compatible, so it can be used
/// as `&mut dyn Wipe` where dynamic dispatch is needed.
///
/// # Example
///
/// ```rust
/// use parapet_zero::{Wipe, WipeProbe};
///
/// let mut key = vec![0x42u8; 32];
/// key.wipe();
/// assert!(key.is_wiped());
/// ```
pub trait Wipe {
    /// Erases the value in place.
    fn wipe(&mut self);
}

/// Trait for verifying at runtime that a value has been wiped.
///
/// Used in tests and assertions to check that no sensitive data remains.
pub trait WipeProbe {
    /// Returns `true` if the value holds no sensitive bytes (all zero).
    fn is_wiped(&self) -> bool;
}

/// Trait for types that verify wiping happened before drop.
///
/// Implementors carry a [`WipeOnDropSentinel`] field and expose it so
/// tests can observe, after the value is gone, whether `wipe()` ran.
pub trait AssertWipeOnDrop {
    /// Clones the internal [`WipeOnDropSentinel`] for verification.
    fn clone_sentinel(&self) -> WipeOnDropSentinel;

    /// Asserts that wiping happens when this value is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `wipe()` was not called before drop.
    fn assert_wipe_on_drop(self);
}
