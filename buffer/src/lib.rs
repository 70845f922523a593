//! Fixed-capacity circular byte buffer.
//!
//! This crate provides a byte-oriented FIFO staging area with a fixed
//! capacity chosen at construction:
//!
//! - [`RingBuffer`]: the buffer itself; it holds no lock and its mutating
//!   methods take `&mut self`
//! - [`SharedRingBuffer`]: a cloneable handle that serializes every operation
//!   behind a mutex
//!
//! # Semantics
//!
//! Writes never overwrite unread data. A write that does not fit is truncated
//! to the free space and the returned count says how much was accepted; a
//! write into a completely full buffer fails with [`BufferError::Full`]. Reads
//! copy out at most what is buffered and fail with [`BufferError::Empty`] when
//! there is nothing, except a zero-length read which always returns `Ok(0)`.
//!
//! ```
//! use coil_buffer::{BufferError, RingBuffer};
//!
//! let mut buf = RingBuffer::new(4).unwrap();
//! buf.write(b"abc").unwrap();
//!
//! let mut two = [0u8; 2];
//! buf.read(&mut two).unwrap();              // consumes "ab"
//! assert_eq!(buf.write(b"defg").unwrap(), 3); // wraps; 'g' does not fit
//! assert_eq!(buf.write_byte(b'h'), Err(BufferError::Full));
//!
//! let mut out = [0u8; 4];
//! assert_eq!(buf.read(&mut out).unwrap(), 4);
//! assert_eq!(&out, b"cdef");
//! ```
//!
//! # Full vs Empty
//!
//! Both a full and an empty buffer leave the read and write cursors on the
//! same index. The buffer keeps an explicit full flag to tell them apart; use
//! [`RingBuffer::readable_len`], [`RingBuffer::is_full`] and friends rather
//! than reasoning about cursors.
//!
//! # Convenience Functions
//!
//! The [`bytes`] module provides pre-sized constructors:
//!
//! ```
//! use coil_buffer::{ring_bytes, ring_bytes_4kb};
//!
//! let buf = ring_bytes_4kb();
//! assert_eq!(buf.capacity(), 4096);
//! assert!(ring_bytes(0).is_err());
//! ```

pub mod bytes;
mod error;
mod ring_buffer;
mod shared;

pub use bytes::*;
pub use error::BufferError;
pub use ring_buffer::RingBuffer;
pub use shared::SharedRingBuffer;
