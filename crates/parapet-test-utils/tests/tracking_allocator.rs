// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_test_utils::TrackingAllocator;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

#[cfg(test)]
mod tracking_allocator_tests {
    use parapet_test_utils::{FreedState, reset, verdict, watch};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_zeroed_region_reports_wiped() {
        reset();

        let mut data = vec![0xABu8; 64];
        let handle = watch(data.as_ptr(), data.len());

        for byte in data.iter_mut() {
            *byte = 0;
        }
        drop(data);

        assert_eq!(verdict(&handle), Some(FreedState::Wiped));
    }

    #[test]
    #[serial]
    fn test_dirty_region_reports_dirty() {
        reset();

        let data = vec![0xABu8; 64];
        let handle = watch(data.as_ptr(), data.len());

        drop(data);

        assert_eq!(verdict(&handle), Some(FreedState::Dirty));
    }

    #[test]
    #[serial]
    fn test_live_region_has_no_verdict() {
        reset();

        let data = vec![0xABu8; 64];
        let handle = watch(data.as_ptr(), data.len());

        assert_eq!(verdict(&handle), None);

        drop(data);
    }

    #[test]
    #[serial]
    fn test_reset_clears_armed_slots() {
        reset();

        let data = vec![0xABu8; 16];
        let handle = watch(data.as_ptr(), data.len());

        reset();
        drop(data);

        assert_eq!(verdict(&handle), None);
    }
}
