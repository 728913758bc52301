// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod wipe_vec_tests {
    use parapet_zero::{is_vec_fully_wiped, wipe_vec};

    #[test]
    fn test_wipe_vec_spare_capacity_after_truncate() {
        let mut vec = vec![0xFFu8; 256];
        vec.truncate(16);

        assert!(!is_vec_fully_wiped(&vec));

        wipe_vec(&mut vec);

        assert!(is_vec_fully_wiped(&vec));
        assert_eq!(vec.len(), 16);
        assert_eq!(vec.capacity(), 256);
    }

    #[test]
    fn test_wipe_vec_zero_capacity() {
        let mut vec: Vec<u8> = Vec::new();

        wipe_vec(&mut vec); // should not panic

        assert!(is_vec_fully_wiped(&vec));
    }

    #[test]
    fn test_wipe_vec_full_vec() {
        let mut vec = vec![0x42u8; 128];

        wipe_vec(&mut vec);

        assert!(vec.iter().all(|&b| b == 0));
    }
}
