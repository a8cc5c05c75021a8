//! The Buffer type - a growable, reusable byte container.

use bytes::{Bytes, BytesMut};
use std::fmt;
use std::io;
use std::time::{Duration, Instant};

use crate::error::PoolError;

/// A growable byte buffer that keeps its allocation across resets.
///
/// Buffers are usually obtained from a [`BufferPool`](crate::BufferPool), but
/// can be created directly too. All append methods return `&mut Self` so calls
/// can be chained.
///
/// # Example
///
/// ```
/// use bytepool::Buffer;
///
/// let mut buf = Buffer::new();
/// buf.write_str("GET ").write(b"/index").write_byte(b'\n');
///
/// assert_eq!(buf.len(), 11);
/// assert_eq!(buf.as_str()?, "GET /index\n");
///
/// buf.reset();
/// assert!(buf.is_empty());
/// # Ok::<(), bytepool::PoolError>(())
/// ```
#[derive(Debug)]
pub struct Buffer {
    data: BytesMut,
    created_at: Instant,
}

impl Buffer {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty buffer with at least `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            created_at: Instant::now(),
        }
    }

    /// Returns the number of bytes written since the last reset.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the written bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns when this buffer was allocated.
    ///
    /// Informational only; the pool never evicts by age.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the time elapsed since this buffer was allocated.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Appends `bytes`.
    pub fn write(&mut self, bytes: &[u8]) -> &mut Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Appends a single byte.
    pub fn write_byte(&mut self, byte: u8) -> &mut Self {
        self.data.extend_from_slice(&[byte]);
        self
    }

    /// Appends the UTF-8 encoding of `s`.
    pub fn write_str(&mut self, s: &str) -> &mut Self {
        self.write(s.as_bytes())
    }

    /// Replaces the content with `bytes`. Same as [`reset`](Self::reset)
    /// followed by [`write`](Self::write).
    pub fn set(&mut self, bytes: &[u8]) -> &mut Self {
        self.reset();
        self.write(bytes)
    }

    /// Replaces the content with the UTF-8 encoding of `s`.
    pub fn set_str(&mut self, s: &str) -> &mut Self {
        self.set(s.as_bytes())
    }

    /// Truncates to zero length, keeping the allocated capacity.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Copies the content into a new `String`.
    ///
    /// Use the [`Display`](fmt::Display) impl (`buf.to_string()`) for a lossy
    /// conversion that never fails.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Utf8`] if the content is not valid UTF-8.
    pub fn try_to_string(&self) -> Result<String, PoolError> {
        self.as_str().map(str::to_owned)
    }

    /// Copies the content into a new `String`, then resets the buffer.
    ///
    /// The buffer is reset whether or not the conversion succeeds.
    ///
    /// # Example
    ///
    /// ```
    /// use bytepool::Buffer;
    ///
    /// let mut buf = Buffer::from("payload");
    /// assert_eq!(buf.to_string_reset()?, "payload");
    /// assert_eq!(buf.len(), 0);
    /// # Ok::<(), bytepool::PoolError>(())
    /// ```
    pub fn to_string_reset(&mut self) -> Result<String, PoolError> {
        let content = self.try_to_string();
        self.reset();
        content
    }

    /// Borrows the content as a `&str` without copying.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Utf8`] if the content is not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, PoolError> {
        Ok(std::str::from_utf8(&self.data)?)
    }

    /// Borrows the content as a `&str` without copying, together with its
    /// length in bytes. An empty buffer yields `("", 0)`.
    ///
    /// The view borrows the buffer, so it cannot outlive a mutation, reset or
    /// release:
    ///
    /// ```compile_fail
    /// use bytepool::Buffer;
    ///
    /// let mut buf = Buffer::from("hello");
    /// let (view, _) = buf.str_view().unwrap();
    /// buf.set_str("x");
    /// println!("{view}");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Utf8`] if the content is not valid UTF-8.
    pub fn str_view(&self) -> Result<(&str, usize), PoolError> {
        if self.data.is_empty() {
            return Ok(("", 0));
        }
        let view = self.as_str()?;
        Ok((view, view.len()))
    }

    /// Hands out the written bytes as immutable [`Bytes`] without copying,
    /// leaving the buffer empty.
    ///
    /// The unused tail of the allocation stays with the buffer; the frozen
    /// bytes keep their part alive until dropped.
    pub fn freeze(&mut self) -> Bytes {
        self.data.split().freeze()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        let mut buf = Self::with_capacity(bytes.len());
        buf.write(bytes);
        buf
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            data: BytesMut::from(&bytes[..]),
            created_at: Instant::now(),
        }
    }
}

/// Lossy UTF-8 rendering; invalid sequences become `U+FFFD`.
impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.data.extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
