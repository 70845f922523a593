//! Fixed-capacity circular byte buffer implementation.

use std::fmt;
use std::io;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::error::BufferError;

/// A fixed-capacity circular byte buffer.
///
/// `RingBuffer` stages bytes between a producer and a consumer. It never
/// grows and never overwrites unread data: a write accepts only as many bytes
/// as there is free space for, and a read hands out only what has been written.
///
/// # Semantics
///
/// - **Write**: copies up to `writeable_len()` bytes, silently dropping the rest
/// - **Read**: copies up to `readable_len()` bytes into the destination
/// - **Full vs empty**: tracked by an explicit flag, since both states leave the
///   read and write cursors on the same index
///
/// The buffer holds no lock. Every mutating method takes `&mut self`; share it
/// across threads through [`SharedRingBuffer`](crate::SharedRingBuffer) or your
/// own mutex.
///
/// # Example
///
/// ```
/// use coil_buffer::RingBuffer;
///
/// let mut buf = RingBuffer::new(4).unwrap();
/// assert_eq!(buf.write(b"hello").unwrap(), 4); // 'o' does not fit
/// assert!(buf.is_full());
///
/// let mut out = [0u8; 8];
/// let n = buf.read(&mut out).unwrap();
/// assert_eq!(&out[..n], b"hell");
/// ```
pub struct RingBuffer {
    buf: Box<[u8]>,
    r: usize, // next index to read
    w: usize, // next index to write
    full: bool,
}

impl RingBuffer {
    /// Creates a new RingBuffer holding at most `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Ok(Self::with_capacity(capacity)),
            None => {
                debug!("ring buffer: rejecting zero capacity");
                Err(BufferError::InvalidCapacity)
            }
        }
    }

    /// Creates a new RingBuffer from a capacity known to be non-zero.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        RingBuffer {
            buf: vec![0; capacity.get()].into_boxed_slice(),
            r: 0,
            w: 0,
            full: false,
        }
    }

    /// Returns the buffer capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of unread bytes.
    pub fn readable_len(&self) -> usize {
        if self.r == self.w {
            return if self.full { self.capacity() } else { 0 };
        }
        if self.w > self.r {
            self.w - self.r
        } else {
            self.capacity() - self.r + self.w
        }
    }

    /// Returns the number of bytes that can be written before the buffer is full.
    pub fn writeable_len(&self) -> usize {
        self.capacity() - self.readable_len()
    }

    /// Returns true if the buffer holds no unread bytes.
    pub fn is_empty(&self) -> bool {
        self.r == self.w && !self.full
    }

    /// Returns true if the buffer holds `capacity()` unread bytes.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Writes as much of `data` as fits.
    ///
    /// Returns the number of bytes accepted, which is less than `data.len()`
    /// when free space runs out. The remaining bytes are dropped, not queued.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidInput`] if `data` is empty
    /// - [`BufferError::Full`] if there is no free space at all
    pub fn write(&mut self, data: &[u8]) -> Result<usize, BufferError> {
        if data.is_empty() {
            return Err(BufferError::InvalidInput);
        }

        let avail = self.writeable_len();
        if avail == 0 {
            return Err(BufferError::Full);
        }

        let n = data.len().min(avail);
        if n < data.len() {
            trace!(requested = data.len(), accepted = n, "ring buffer: truncating write");
        }

        let size = self.capacity();
        let end = size - self.w;
        if end >= n {
            self.buf[self.w..self.w + n].copy_from_slice(&data[..n]);
            self.w += n;
        } else {
            // data: |------end------|--surplus--|
            //        fills [w, size)  wraps to 0
            let surplus = n - end;
            self.buf[self.w..].copy_from_slice(&data[..end]);
            self.buf[..surplus].copy_from_slice(&data[end..n]);
            self.w = surplus;
            trace!(w = self.w, "ring buffer: write wrapped");
        }

        if self.w == size {
            self.w = 0;
        }
        self.mark_full_if_caught_up();

        Ok(n)
    }

    /// Writes a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Full`] if there is no free space.
    pub fn write_byte(&mut self, b: u8) -> Result<(), BufferError> {
        if self.writeable_len() == 0 {
            return Err(BufferError::Full);
        }

        self.buf[self.w] = b;
        self.w += 1;
        if self.w == self.capacity() {
            self.w = 0;
        }
        self.mark_full_if_caught_up();

        Ok(())
    }

    /// Reads unread bytes into `dest`.
    ///
    /// Returns the number of bytes copied, at most `dest.len()`. A zero-length
    /// `dest` always succeeds with 0, even on an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Empty`] if there is nothing to read.
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize, BufferError> {
        if dest.is_empty() {
            return Ok(0);
        }

        let avail = self.readable_len();
        if avail == 0 {
            return Err(BufferError::Empty);
        }

        let n = dest.len().min(avail);
        let size = self.capacity();
        if self.r + n <= size {
            dest[..n].copy_from_slice(&self.buf[self.r..self.r + n]);
        } else {
            let first = size - self.r;
            dest[..first].copy_from_slice(&self.buf[self.r..]);
            dest[first..n].copy_from_slice(&self.buf[..n - first]);
            trace!(first, rest = n - first, "ring buffer: read wrapped");
        }

        self.r = (self.r + n) % size;
        // Any non-empty read frees at least one byte.
        self.full = false;

        Ok(n)
    }

    /// Discards all unread bytes.
    ///
    /// The backing store is not zeroed; its old contents are simply unreachable.
    pub fn reset(&mut self) {
        self.r = 0;
        self.w = 0;
        self.full = false;
    }

    fn mark_full_if_caught_up(&mut self) {
        if self.w == self.r {
            self.full = true;
            trace!(capacity = self.capacity(), "ring buffer: full");
        }
    }
}

// just for debugging
impl fmt::Display for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Read: {}, Write: {}, Size: {}, Full: {}",
            self.r,
            self.w,
            self.capacity(),
            self.full
        )
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("r", &self.r)
            .field("w", &self.w)
            .field("capacity", &self.capacity())
            .field("full", &self.full)
            .finish()
    }
}

/// Empty reads surface as [`io::ErrorKind::WouldBlock`] rather than `Ok(0)`,
/// which `io::Read` callers take as end-of-stream.
impl io::Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf)?)
    }
}

/// A full buffer surfaces as [`io::ErrorKind::WouldBlock`].
impl io::Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        Ok(RingBuffer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
