//! Convenience constructors for common ring buffer sizes.

use std::num::NonZeroUsize;

use crate::error::BufferError;
use crate::ring_buffer::RingBuffer;

/// Capacity used by [`ring_bytes_default`]: 1KB.
pub const DEFAULT_CAPACITY: NonZeroUsize = kb(1);

const fn size(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(size) => size,
        None => panic!("preset size must be non-zero"),
    }
}

const fn kb(n: usize) -> NonZeroUsize {
    size(n * 1024)
}

/// Creates a 256B ring buffer.
pub fn ring_bytes_256b() -> RingBuffer {
    RingBuffer::with_capacity(const { size(256) })
}

/// Creates a 1KB ring buffer.
pub fn ring_bytes_1kb() -> RingBuffer {
    RingBuffer::with_capacity(const { kb(1) })
}

/// Creates a 4KB ring buffer.
pub fn ring_bytes_4kb() -> RingBuffer {
    RingBuffer::with_capacity(const { kb(4) })
}

/// Creates a 16KB ring buffer.
pub fn ring_bytes_16kb() -> RingBuffer {
    RingBuffer::with_capacity(const { kb(16) })
}

/// Creates a 64KB ring buffer.
pub fn ring_bytes_64kb() -> RingBuffer {
    RingBuffer::with_capacity(const { kb(64) })
}

/// Creates a ring buffer of [`DEFAULT_CAPACITY`].
pub fn ring_bytes_default() -> RingBuffer {
    RingBuffer::with_capacity(DEFAULT_CAPACITY)
}

/// Creates a ring buffer with the specified capacity.
///
/// # Errors
///
/// Returns [`BufferError::InvalidCapacity`] if `size` is zero.
pub fn ring_bytes(size: usize) -> Result<RingBuffer, BufferError> {
    RingBuffer::new(size)
}
