//! Lock-protected, cloneable ring buffer handle.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::BufferError;
use crate::ring_buffer::RingBuffer;

/// A thread-safe handle to a [`RingBuffer`].
///
/// Every operation takes the inner lock for its whole duration, so concurrent
/// callers are serialized. Cloning shares the underlying buffer via `Arc`.
///
/// Nothing here waits for data or space: a read on an empty buffer fails with
/// [`BufferError::Empty`] and a write on a full one with [`BufferError::Full`],
/// exactly as on the unshared buffer.
///
/// # Example
///
/// ```
/// use coil_buffer::SharedRingBuffer;
/// use std::thread;
///
/// let buf = SharedRingBuffer::new(16).unwrap();
/// let writer = buf.clone();
///
/// thread::spawn(move || {
///     writer.write(b"ping").unwrap();
/// })
/// .join()
/// .unwrap();
///
/// let mut out = [0u8; 4];
/// assert_eq!(buf.read(&mut out).unwrap(), 4);
/// assert_eq!(&out, b"ping");
/// ```
pub struct SharedRingBuffer {
    inner: Arc<Mutex<RingBuffer>>,
}

impl Clone for SharedRingBuffer {
    fn clone(&self) -> Self {
        SharedRingBuffer {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl From<RingBuffer> for SharedRingBuffer {
    fn from(buf: RingBuffer) -> Self {
        SharedRingBuffer {
            inner: Arc::new(Mutex::new(buf)),
        }
    }
}

impl SharedRingBuffer {
    /// Creates a new shared buffer with the specified capacity.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        RingBuffer::new(capacity).map(Self::from)
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Returns the number of unread bytes.
    pub fn readable_len(&self) -> usize {
        self.inner.lock().readable_len()
    }

    /// Returns the number of bytes that can be written before the buffer is full.
    pub fn writeable_len(&self) -> usize {
        self.inner.lock().writeable_len()
    }

    /// Returns true if the buffer holds no unread bytes.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns true if the buffer is full.
    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    /// Writes as much of `data` as fits. See [`RingBuffer::write`].
    pub fn write(&self, data: &[u8]) -> Result<usize, BufferError> {
        self.inner.lock().write(data)
    }

    /// Writes a single byte. See [`RingBuffer::write_byte`].
    pub fn write_byte(&self, b: u8) -> Result<(), BufferError> {
        self.inner.lock().write_byte(b)
    }

    /// Reads unread bytes into `dest`. See [`RingBuffer::read`].
    pub fn read(&self, dest: &mut [u8]) -> Result<usize, BufferError> {
        self.inner.lock().read(dest)
    }

    /// Discards all unread bytes.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Runs `f` with exclusive access to the buffer.
    ///
    /// Use this when several operations must happen without another handle
    /// interleaving, e.g. checking free space and then writing.
    pub fn with<R>(&self, f: impl FnOnce(&mut RingBuffer) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Unwraps the buffer if this is the only handle left.
    ///
    /// Returns `Err(self)` while other clones are alive.
    pub fn into_inner(self) -> Result<RingBuffer, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| SharedRingBuffer { inner })
    }
}

impl fmt::Display for SharedRingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.lock(), f)
    }
}

impl fmt::Debug for SharedRingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRingBuffer")
            .field(&*self.inner.lock())
            .finish()
    }
}
