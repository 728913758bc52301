// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Observes the wipe-before-free invariant from outside the buffer,
//! through an instrumented global allocator.

use parapet_test_utils::TrackingAllocator;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

#[cfg(test)]
mod wipe_on_drop_tests {
    use parapet_buffer::CryptoBuffer;
    use parapet_test_utils::{FreedState, reset, verdict, watch};
    use parapet_zero::Wipe;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_drop_wipes_storage_before_free() {
        reset();

        let buffer = CryptoBuffer::from_slice(&[0xABu8; 64]).expect("Failed to from_slice(..)");
        let handle = watch(buffer.as_ptr(), buffer.len());

        drop(buffer);

        assert_eq!(verdict(&handle), Some(FreedState::Wiped));
    }

    #[test]
    #[serial]
    fn test_drop_wipes_unwritten_buffer() {
        reset();

        let buffer = CryptoBuffer::new(128).expect("Failed to new(..)");
        let handle = watch(buffer.as_ptr(), buffer.len());

        drop(buffer);

        assert_eq!(verdict(&handle), Some(FreedState::Wiped));
    }

    #[test]
    #[serial]
    fn test_explicit_wipe_then_drop_stays_wiped() {
        reset();

        let mut buffer = CryptoBuffer::from_slice(&[0x42u8; 32]).expect("Failed to from_slice(..)");
        let handle = watch(buffer.as_ptr(), buffer.len());

        buffer.wipe();
        drop(buffer);

        assert_eq!(verdict(&handle), Some(FreedState::Wiped));
    }

    #[test]
    #[serial]
    fn test_every_chunk_wipes_its_own_storage() {
        reset();

        let source = CryptoBuffer::from_slice(&[0xCDu8; 40]).expect("Failed to from_slice(..)");
        let chunks = source.try_chunks(16).expect("Failed to try_chunks(..)");

        let handles: Vec<_> = chunks
            .iter()
            .map(|chunk| watch(chunk.as_ptr(), chunk.len()))
            .collect();

        drop(chunks);

        for handle in &handles {
            assert_eq!(verdict(handle), Some(FreedState::Wiped));
        }
    }

    #[test]
    #[serial]
    fn test_taken_buffer_wipes_at_new_owner_drop() {
        reset();

        let mut source = CryptoBuffer::from_slice(&[0xEFu8; 24]).expect("Failed to from_slice(..)");
        let moved = source.take();
        let handle = watch(moved.as_ptr(), moved.len());

        drop(source); // empty source frees nothing watched

        assert_eq!(verdict(&handle), None);

        drop(moved);

        assert_eq!(verdict(&handle), Some(FreedState::Wiped));
    }

    #[test]
    #[serial]
    fn test_plain_vec_leaks_content_on_free() {
        reset();

        // Control: the same bytes in a Vec survive the free unwiped,
        // which is the failure mode CryptoBuffer exists to close.
        let data = vec![0xABu8; 64];
        let handle = watch(data.as_ptr(), data.len());

        drop(data);

        assert_eq!(verdict(&handle), Some(FreedState::Dirty));
    }
}
