// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Parapet crates.
//!
//! [`TrackingAllocator`] is a `GlobalAlloc` wrapper around the system
//! allocator that inspects registered heap regions at the moment they
//! are freed, before the memory goes back to the system. Tests use it to
//! observe the wipe-before-free invariant from outside the type under
//! test: register the region with [`watch`], drop the owning value, then
//! ask [`verdict`] whether the freed bytes read zero.
//!
//! The watch registry is a fixed set of atomic slots. Allocator hooks
//! run inside `dealloc`, so the registry must never allocate; everything
//! is preallocated and lock-free. The registry is global state: tests
//! that use it run serially (`serial_test`) and call [`reset`] first.
//!
//! # Example
//!
//! ```rust
//! // #[global_allocator]
//! // static ALLOC: parapet_test_utils::TrackingAllocator = parapet_test_utils::TrackingAllocator;
//!
//! parapet_test_utils::reset();
//!
//! let secret = vec![0u8; 32]; // pretend this held key material, then was wiped
//! let handle = parapet_test_utils::watch(secret.as_ptr(), secret.len());
//!
//! assert_eq!(parapet_test_utils::verdict(&handle), None); // still live
//! drop(secret);
//! // With TrackingAllocator installed, the drop above records a verdict:
//! // assert_eq!(parapet_test_utils::verdict(&handle), Some(FreedState::Wiped));
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

const MAX_WATCHED: usize = 32;

const STATE_FREE: u8 = 0;
const STATE_CLAIMED: u8 = 1;
const STATE_ARMED: u8 = 2;
const STATE_WIPED: u8 = 3;
const STATE_DIRTY: u8 = 4;

static WATCH_PTR: [AtomicUsize; MAX_WATCHED] = [const { AtomicUsize::new(0) }; MAX_WATCHED];
static WATCH_LEN: [AtomicUsize; MAX_WATCHED] = [const { AtomicUsize::new(0) }; MAX_WATCHED];
static WATCH_STATE: [AtomicU8; MAX_WATCHED] = [const { AtomicU8::new(STATE_FREE) }; MAX_WATCHED];

/// System-allocator wrapper that inspects watched regions on free.
///
/// Install once per test binary:
///
/// ```rust,ignore
/// #[global_allocator]
/// static ALLOC: TrackingAllocator = TrackingAllocator;
/// ```
pub struct TrackingAllocator;

/// Handle for one watched region, returned by [`watch`].
pub struct WatchHandle {
    slot: usize,
}

/// What a watched region held at the moment it was freed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FreedState {
    /// Every watched byte read zero when the region was freed.
    Wiped,
    /// At least one watched byte was non-zero when the region was freed.
    Dirty,
}

/// Registers a heap region to be inspected when it is freed.
///
/// The region must lie inside a single live allocation. The verdict is
/// recorded when the allocation containing it is deallocated or
/// reallocated.
///
/// # Panics
///
/// Panics if the registry is full; call [`reset`] between tests.
pub fn watch(ptr: *const u8, len: usize) -> WatchHandle {
    for slot in 0..MAX_WATCHED {
        if WATCH_STATE[slot]
            .compare_exchange(STATE_FREE, STATE_CLAIMED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            WATCH_PTR[slot].store(ptr as usize, Ordering::SeqCst);
            WATCH_LEN[slot].store(len, Ordering::SeqCst);
            WATCH_STATE[slot].store(STATE_ARMED, Ordering::SeqCst);

            return WatchHandle { slot };
        }
    }

    panic!("watch registry full; call parapet_test_utils::reset() between tests");
}

/// Returns the recorded state of a watched region, if it has been freed.
///
/// `None` means the allocation is still live (or the allocator wrapper
/// is not installed in this binary).
pub fn verdict(handle: &WatchHandle) -> Option<FreedState> {
    match WATCH_STATE[handle.slot].load(Ordering::SeqCst) {
        STATE_WIPED => Some(FreedState::Wiped),
        STATE_DIRTY => Some(FreedState::Dirty),
        _ => None,
    }
}

/// Clears the whole registry.
///
/// Call at the start of every test that watches regions. Invalidates all
/// outstanding [`WatchHandle`]s.
pub fn reset() {
    for slot in 0..MAX_WATCHED {
        WATCH_STATE[slot].store(STATE_FREE, Ordering::SeqCst);
        WATCH_PTR[slot].store(0, Ordering::SeqCst);
        WATCH_LEN[slot].store(0, Ordering::SeqCst);
    }
}

/// Inspects armed slots whose region lies inside the block being freed.
///
/// Runs on the dealloc path: reads only, no allocation, no locks.
fn inspect_before_free(ptr: *mut u8, size: usize) {
    let base = ptr as usize;

    for slot in 0..MAX_WATCHED {
        if WATCH_STATE[slot].load(Ordering::SeqCst) != STATE_ARMED {
            continue;
        }

        let watched_ptr = WATCH_PTR[slot].load(Ordering::SeqCst);
        let watched_len = WATCH_LEN[slot].load(Ordering::SeqCst);

        if watched_ptr < base || watched_ptr + watched_len > base + size {
            continue;
        }

        let mut wiped = true;
        for i in 0..watched_len {
            // SAFETY: the block is still owned by the caller of dealloc
            // and valid for `size` bytes; the watched range is inside it
            if unsafe { *(watched_ptr as *const u8).add(i) } != 0 {
                wiped = false;
                break;
            }
        }

        let state = if wiped { STATE_WIPED } else { STATE_DIRTY };
        WATCH_STATE[slot].store(state, Ordering::SeqCst);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded to the system allocator with the same layout
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded to the system allocator with the same layout
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        inspect_before_free(ptr, layout.size());

        // SAFETY: forwarded to the system allocator with the same layout
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // The old block may be freed by the move; record its verdict now
        inspect_before_free(ptr, layout.size());

        // SAFETY: forwarded to the system allocator with the same layout
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}
