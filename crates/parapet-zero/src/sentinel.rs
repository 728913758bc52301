// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime verification that wiping happened before drop.

use alloc::sync::Arc;
use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

use super::traits::{Wipe, WipeProbe};

/// Shared flag recording whether a value's `wipe()` ran.
///
/// The sentinel wraps an `Arc<AtomicBool>` that starts pristine (`true`)
/// and is lowered by [`Wipe::wipe`] through a volatile store. Clones
/// share the flag, so a test can keep a clone, drop the owning value,
/// and then check that the drop path wiped.
///
/// The sentinel itself never panics; enforcement lives in
/// [`assert_wipe_on_drop`](crate::assert_wipe_on_drop).
///
/// # Example
///
/// ```rust
/// use parapet_zero::{Wipe, WipeOnDropSentinel, WipeProbe};
///
/// let mut sentinel = WipeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_wiped());
/// sentinel.wipe();
/// assert!(observer.is_wiped());
/// ```
#[derive(Clone, Debug)]
pub struct WipeOnDropSentinel(Arc<AtomicBool>);

impl Default for WipeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for WipeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for WipeOnDropSentinel {}

impl WipeOnDropSentinel {
    /// Resets the sentinel to the pristine (not wiped) state.
    ///
    /// Used by tests that reuse one sentinel across several assertions.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl Wipe for WipeOnDropSentinel {
    fn wipe(&mut self) {
        // SAFETY: volatile store through the atomic's pointer, so the
        // flag transition survives optimization like the data wipe does
        unsafe {
            ptr::write_volatile(self.0.as_ptr(), false);
        }
    }
}

impl WipeProbe for WipeOnDropSentinel {
    fn is_wiped(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}
