// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod wipe_bytes_tests {
    use parapet_zero::{is_slice_wiped, wipe_bytes};

    #[test]
    fn test_wipe_bytes_large_buffer() {
        let mut data = vec![0xABu8; 1 << 16];

        wipe_bytes(&mut data);

        assert!(is_slice_wiped(&data));
    }

    #[test]
    fn test_wipe_bytes_every_pattern_byte() {
        for pattern in [0x01u8, 0x7F, 0x80, 0xFF] {
            let mut data = vec![pattern; 33];

            wipe_bytes(&mut data);

            assert!(is_slice_wiped(&data));
        }
    }

    #[test]
    fn test_wipe_bytes_unaligned_lengths() {
        for len in [1usize, 3, 7, 31, 63, 65, 127] {
            let mut data = vec![0x5Au8; len];

            wipe_bytes(&mut data);

            assert!(is_slice_wiped(&data));
        }
    }
}
