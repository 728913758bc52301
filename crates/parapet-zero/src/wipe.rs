// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tiered erase primitives and wipe verification probes.

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

/// Erases `len` bytes starting at `ptr` through the libc explicit-zero
/// primitive.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` bytes.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
#[inline(always)]
unsafe fn wipe_ptr(ptr: *mut u8, len: usize) {
    // SAFETY: caller guarantees ptr is valid for len bytes
    unsafe {
        libc::explicit_bzero(ptr.cast(), len);
    }
}

/// Erases `len` bytes starting at `ptr` through C11 `memset_s`.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` bytes.
#[cfg(target_vendor = "apple")]
#[inline(always)]
unsafe fn wipe_ptr(ptr: *mut u8, len: usize) {
    // memset_s cannot fail here: smax equals n and both are <= RSIZE_MAX
    // for any live allocation.
    // SAFETY: caller guarantees ptr is valid for len bytes
    unsafe {
        let _ = libc::memset_s(ptr.cast(), len, 0, len);
    }
}

/// Erases `len` bytes starting at `ptr` through a volatile-fenced memset.
///
/// The volatile read keeps the store observable, so the optimizer cannot
/// prove it dead and remove it.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` bytes.
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "dragonfly",
    target_vendor = "apple"
)))]
#[inline(always)]
unsafe fn wipe_ptr(ptr: *mut u8, len: usize) {
    // SAFETY: caller guarantees ptr is valid for len bytes
    unsafe {
        core::ptr::write_bytes(ptr, 0, len);
        core::ptr::read_volatile(ptr.cast_const());
    }
}

/// Overwrites every byte of the slice with zero.
///
/// The erase goes through the strongest primitive available for the
/// target (see the crate docs for the tier table) and is never optimized
/// away. An empty slice is a no-op, never an error.
///
/// # Example
///
/// ```rust
/// use parapet_zero::{is_slice_wiped, wipe_bytes};
///
/// let mut keystream = vec![0xABu8; 64];
/// wipe_bytes(&mut keystream);
/// assert!(is_slice_wiped(&keystream));
/// ```
#[inline]
pub fn wipe_bytes(bytes: &mut [u8]) {
    if bytes.is_empty() {
        return;
    }

    // SAFETY: a live mutable slice is valid for writes of its full length
    unsafe {
        wipe_ptr(bytes.as_mut_ptr(), bytes.len());
    }

    compiler_fence(Ordering::SeqCst);
}

/// Overwrites the **entire allocation** of a `Vec<u8>` with zero.
///
/// Erases `[0, capacity)`, not just `[0, len)`. Bytes parked in spare
/// capacity after `truncate()` or a shortening write would survive a
/// length-bounded wipe; this one reaches them.
///
/// # Example
///
/// ```rust
/// use parapet_zero::{is_vec_fully_wiped, wipe_vec};
///
/// let mut vec = vec![0xFFu8; 100];
/// vec.truncate(10); // len = 10, capacity = 100, spare still 0xFF
///
/// wipe_vec(&mut vec);
/// assert!(is_vec_fully_wiped(&vec));
/// ```
#[inline]
pub fn wipe_vec(vec: &mut Vec<u8>) {
    let cap = vec.capacity();
    if cap == 0 {
        return;
    }

    // SAFETY: a Vec's allocation is valid for capacity bytes
    unsafe {
        wipe_ptr(vec.as_mut_ptr(), cap);
    }

    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of the slice is zero.
///
/// # Example
///
/// ```rust
/// use parapet_zero::is_slice_wiped;
///
/// assert!(is_slice_wiped(&[0u8; 8]));
/// assert!(!is_slice_wiped(&[0u8, 1, 0]));
/// ```
#[inline(always)]
pub fn is_slice_wiped(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the **entire allocation** of a `Vec<u8>` is zero.
///
/// Checks `[0, capacity)`, mirroring [`wipe_vec`]. Reads go through the
/// raw pointer so spare capacity is inspected without constructing a
/// reference to uninitialized memory.
#[inline(never)]
pub fn is_vec_fully_wiped(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    for i in 0..cap {
        // SAFETY: the allocation is valid for capacity bytes and we only read
        unsafe {
            if *base.add(i) != 0 {
                return false;
            }
        }
    }

    true
}
