// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helpers for verifying wipe-on-drop behavior.

use super::traits::{AssertWipeOnDrop, WipeProbe};

/// Asserts that a value wipes itself when dropped.
///
/// 1. Clones the value's sentinel
/// 2. Resets it to the pristine state
/// 3. Drops the value
/// 4. Asserts the sentinel was lowered during drop
///
/// # Panics
///
/// Panics if the value's `wipe()` method did not run during drop.
pub fn assert_wipe_on_drop<T: AssertWipeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_wiped());
    drop(value);
    assert!(sentinel.is_wiped());
}
