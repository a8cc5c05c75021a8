//! RAII guard that returns a buffer to its pool on drop.

use std::ops::{Deref, DerefMut};

use super::BufferPool;
use crate::buffer::Buffer;

/// A [`Buffer`] on loan from a [`BufferPool`].
///
/// Derefs to [`Buffer`]. When the guard is dropped the buffer is released back
/// to the pool it came from, unless it was taken out with
/// [`detach`](Self::detach).
pub struct PooledBuffer<'a> {
    buf: Buffer,
    /// `None` once detached.
    pool: Option<&'a BufferPool>,
}

impl<'a> PooledBuffer<'a> {
    pub(crate) fn new(pool: &'a BufferPool, buf: Buffer) -> Self {
        Self {
            buf,
            pool: Some(pool),
        }
    }

    /// Takes the buffer out of the guard so it is not returned to the pool.
    pub fn detach(mut self) -> Buffer {
        self.pool = None;
        std::mem::take(&mut self.buf)
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = Buffer;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl AsRef<[u8]> for PooledBuffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.buf.bytes()
    }
}

impl std::fmt::Debug for PooledBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledBuffer")
            .field("buf", &self.buf)
            .field("attached", &self.pool.is_some())
            .finish()
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.release(std::mem::take(&mut self.buf));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let pool = BufferPool::new(2);
        {
            let mut buf = pool.acquire_pooled();
            buf.write_str("temporary");
            assert_eq!(buf.len(), 9);
            assert_eq!(pool.available(), 1);
        }
        assert_eq!(pool.available(), 2);
        assert_eq!(pool.stats().returns, 1);
    }

    #[test]
    fn test_released_buffer_is_reset() {
        let pool = BufferPool::new(1);
        {
            let mut buf = pool.acquire_pooled();
            buf.write(b"stale");
        }
        let buf = pool.acquire();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_detach_keeps_buffer() {
        let pool = BufferPool::new(1);
        let mut guard = pool.acquire_pooled();
        guard.write_str("owned");

        let buf = guard.detach();
        assert_eq!(buf.bytes(), b"owned");
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.stats().returns, 0);
    }

    #[test]
    fn test_guard_with_exhausted_pool() {
        let pool = BufferPool::new(0);
        {
            let _buf = pool.acquire_pooled();
        }
        assert_eq!(pool.exhausted(), 1);
        assert_eq!(pool.stats().drops, 1);
    }
}
