// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::mem;
use core::ops::{BitXorAssign, Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use parapet_zero::{
    AssertWipeOnDrop, Wipe, WipeOnDropSentinel, WipeProbe, assert_wipe_on_drop, is_vec_fully_wiped,
    wipe_vec,
};

use crate::error::BufferError;

/// Fixed-length byte buffer that wipes its storage before release.
///
/// The buffer owns exactly `len` bytes, allocated once at construction.
/// It never grows, shrinks, or reallocates, so the allocation the wipe
/// runs over on drop is the same one the secrets lived in.
///
/// Duplication is explicit: there is no `Clone` impl. Use
/// [`try_clone`](Self::try_clone) for an intentional deep copy and
/// [`take`](Self::take) to transfer ownership out of a `&mut` place,
/// leaving the source empty.
///
/// The buffer carries no shared mutable state. It is `Send` and `Sync`;
/// threads stay safe by each exclusively owning the instances they
/// touch, which the `&mut` receivers enforce.
///
/// # Example
///
/// ```rust
/// use parapet_buffer::{BufferError, CryptoBuffer};
///
/// fn example() -> Result<(), BufferError> {
///     let mut key = CryptoBuffer::new(32)?;
///     key.set(0, 0x42)?;
///     assert_eq!(key.get(0)?, 0x42);
///     assert_eq!(key.len(), 32);
///     Ok(())
/// } // key wipes its storage on drop
/// # example().unwrap();
/// ```
pub struct CryptoBuffer {
    inner: Vec<u8>,
    __sentinel: WipeOnDropSentinel,
}

impl core::fmt::Debug for CryptoBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CryptoBuffer")
            .field("data", &"REDACTED")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl PartialEq for CryptoBuffer {
    fn eq(&self, other: &Self) -> bool {
        // Skip __sentinel (metadata that changes during wiping)
        self.inner == other.inner
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Eq for CryptoBuffer {}

impl CryptoBuffer {
    /// Allocates storage for exactly `len` bytes, without growth slack.
    fn try_allocate(len: usize) -> Result<Vec<u8>, BufferError> {
        let mut inner = Vec::new();
        inner
            .try_reserve_exact(len)
            .map_err(|_| BufferError::Allocation { requested: len })?;

        Ok(inner)
    }

    /// Creates a zero-filled buffer of exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if storage cannot be obtained.
    pub fn new(len: usize) -> Result<Self, BufferError> {
        let mut inner = Self::try_allocate(len)?;
        inner.resize(len, 0);

        Ok(Self {
            inner,
            __sentinel: WipeOnDropSentinel::default(),
        })
    }

    /// Creates a buffer holding an independent copy of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if storage cannot be obtained.
    pub fn from_slice(src: &[u8]) -> Result<Self, BufferError> {
        let mut inner = Self::try_allocate(src.len())?;
        inner.extend_from_slice(src);

        Ok(Self {
            inner,
            __sentinel: WipeOnDropSentinel::default(),
        })
    }

    /// Creates a buffer by concatenating `parts` in order.
    ///
    /// The inverse of [`try_chunks`](Self::try_chunks): one allocation
    /// sized to the sum of the parts, each part deep-copied in. The parts
    /// are unchanged and remain independent owners of their own bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if storage cannot be obtained.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parapet_buffer::CryptoBuffer;
    ///
    /// let source = CryptoBuffer::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// let chunks = source.try_chunks(2).unwrap();
    /// let rebuilt = CryptoBuffer::concat(&chunks).unwrap();
    /// assert_eq!(rebuilt.as_slice(), source.as_slice());
    /// ```
    pub fn concat(parts: &[CryptoBuffer]) -> Result<Self, BufferError> {
        let total = parts.iter().map(CryptoBuffer::len).sum();

        let mut inner = Self::try_allocate(total)?;
        for part in parts {
            inner.extend_from_slice(part.as_slice());
        }

        Ok(Self {
            inner,
            __sentinel: WipeOnDropSentinel::default(),
        })
    }

    /// Returns the fixed length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reads the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<u8, BufferError> {
        self.inner
            .get(index)
            .copied()
            .ok_or(BufferError::OutOfRange {
                index,
                len: self.inner.len(),
            })
    }

    /// Writes `byte` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, byte: u8) -> Result<(), BufferError> {
        let len = self.inner.len();
        let slot = self
            .inner
            .get_mut(index)
            .ok_or(BufferError::OutOfRange { index, len })?;
        *slot = byte;

        Ok(())
    }

    /// Returns a slice view of the entire buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Returns a mutable slice view of the entire buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner
    }

    /// Returns a raw pointer to the buffer's storage.
    ///
    /// Escape hatch for cipher and digest primitives that operate on a
    /// pointer-and-length pair. Carries no bounds guarantee and must not
    /// be retained beyond the buffer's lifetime; ownership and the
    /// wipe-before-release contract stay with the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.inner.as_ptr()
    }

    /// Returns a mutable raw pointer to the buffer's storage.
    ///
    /// Same contract as [`as_ptr`](Self::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.inner.as_mut_ptr()
    }

    /// Creates an intentional deep copy of the buffer.
    ///
    /// The copy owns its own storage and independently wipes it on drop.
    /// Mutating or dropping either buffer never affects the other.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if storage cannot be obtained.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        Self::from_slice(&self.inner)
    }

    /// Transfers ownership of the storage out of `self`.
    ///
    /// The source is left empty (zero length, no storage) and remains
    /// safe to use and to drop; its later wipe is a no-op. The bytes move
    /// without being copied, so no second resident copy is created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parapet_buffer::CryptoBuffer;
    ///
    /// let mut source = CryptoBuffer::from_slice(&[1, 2, 3]).unwrap();
    /// let moved = source.take();
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(moved.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Self {
        Self {
            inner: mem::take(&mut self.inner),
            __sentinel: WipeOnDropSentinel::default(),
        }
    }

    /// Partitions the buffer into independently owned chunks.
    ///
    /// Produces `len().div_ceil(chunk_size)` buffers in source order.
    /// Every chunk except the last holds exactly `chunk_size` bytes; the
    /// last holds the remainder, or a full `chunk_size` when the length
    /// divides evenly. Each chunk is a deep copy with its own
    /// wipe-on-drop lifecycle; the source is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidChunkSize`] unless
    /// `1 <= chunk_size <= len()` (a zero-length source is always
    /// rejected), and [`BufferError::Allocation`] if a chunk cannot be
    /// allocated. On any error nothing is returned; chunks built so far
    /// are dropped and wipe themselves.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parapet_buffer::CryptoBuffer;
    ///
    /// let buffer = CryptoBuffer::from_slice(&[0u8; 10]).unwrap();
    /// let chunks = buffer.try_chunks(3).unwrap();
    ///
    /// let lengths: Vec<usize> = chunks.iter().map(CryptoBuffer::len).collect();
    /// assert_eq!(lengths, [3, 3, 3, 1]);
    /// ```
    pub fn try_chunks(&self, chunk_size: usize) -> Result<Vec<CryptoBuffer>, BufferError> {
        let len = self.inner.len();
        if chunk_size == 0 || chunk_size > len {
            return Err(BufferError::InvalidChunkSize { chunk_size, len });
        }

        let count = len.div_ceil(chunk_size);
        let mut chunks = Vec::new();
        chunks
            .try_reserve_exact(count)
            .map_err(|_| BufferError::Allocation {
                requested: count * mem::size_of::<CryptoBuffer>(),
            })?;

        for part in self.inner.chunks(chunk_size) {
            chunks.push(Self::from_slice(part)?);
        }

        Ok(chunks)
    }

    /// XORs `other` into `self` over the overlapping prefix.
    ///
    /// For `i` in `[0, min(len, other.len))`, `self[i] ^= other[i]`.
    /// Bytes past the prefix are untouched and `other` is never modified.
    /// Length mismatch is not an error: the operation limits itself to
    /// the overlap, which is the shape keystream application wants.
    /// Returns the receiver for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parapet_buffer::CryptoBuffer;
    ///
    /// let mut data = CryptoBuffer::from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();
    /// let pad = CryptoBuffer::from_slice(&[0xFF, 0xFF, 0xFF]).unwrap();
    ///
    /// data.xor(&pad).xor(&pad); // involutive on the prefix
    /// assert_eq!(data.as_slice(), &[0x01, 0x02, 0x03, 0x04, 0x05]);
    /// ```
    pub fn xor(&mut self, other: &Self) -> &mut Self {
        for (dst, src) in self.inner.iter_mut().zip(other.inner.iter()) {
            *dst ^= *src;
        }

        self
    }

    /// Constant-time content equality.
    ///
    /// Comparison time depends only on the lengths, not on where the
    /// contents differ. Buffers of different lengths compare unequal.
    pub fn ct_eq(&self, other: &Self) -> bool {
        if self.inner.len() != other.inner.len() {
            return false;
        }

        self.inner
            .iter()
            .zip(other.inner.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl Default for CryptoBuffer {
    /// The empty buffer: zero length, no storage.
    fn default() -> Self {
        Self {
            inner: Vec::new(),
            __sentinel: WipeOnDropSentinel::default(),
        }
    }
}

impl Deref for CryptoBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CryptoBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl BitXorAssign<&CryptoBuffer> for CryptoBuffer {
    fn bitxor_assign(&mut self, rhs: &CryptoBuffer) {
        self.xor(rhs);
    }
}

impl Wipe for CryptoBuffer {
    /// Erases the whole allocation now, without waiting for drop.
    ///
    /// The buffer stays alive and readable (as zeros) afterwards. Wiping
    /// an empty or already-wiped buffer is a no-op, never an error.
    fn wipe(&mut self) {
        wipe_vec(&mut self.inner);
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.wipe();
        compiler_fence(Ordering::SeqCst);
    }
}

impl WipeProbe for CryptoBuffer {
    fn is_wiped(&self) -> bool {
        is_vec_fully_wiped(&self.inner)
    }
}

impl AssertWipeOnDrop for CryptoBuffer {
    fn clone_sentinel(&self) -> WipeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_wipe_on_drop(self) {
        assert_wipe_on_drop(self);
    }
}

impl Drop for CryptoBuffer {
    fn drop(&mut self) {
        self.wipe();
    }
}
