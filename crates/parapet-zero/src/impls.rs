// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait impls for byte containers.

use alloc::vec::Vec;

use super::traits::{Wipe, WipeProbe};
use super::wipe::{is_slice_wiped, is_vec_fully_wiped, wipe_bytes, wipe_vec};

impl Wipe for [u8] {
    fn wipe(&mut self) {
        wipe_bytes(self);
    }
}

impl WipeProbe for [u8] {
    fn is_wiped(&self) -> bool {
        is_slice_wiped(self)
    }
}

impl Wipe for Vec<u8> {
    fn wipe(&mut self) {
        wipe_vec(self);
    }
}

impl WipeProbe for Vec<u8> {
    fn is_wiped(&self) -> bool {
        is_vec_fully_wiped(self)
    }
}

impl<const N: usize> Wipe for [u8; N] {
    fn wipe(&mut self) {
        wipe_bytes(self);
    }
}

impl<const N: usize> WipeProbe for [u8; N] {
    fn is_wiped(&self) -> bool {
        is_slice_wiped(self)
    }
}
