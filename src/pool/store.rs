//! Bounded, lock-free pool of reusable buffers.

use crossbeam_queue::ArrayQueue;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

use super::PooledBuffer;
use crate::buffer::Buffer;
use crate::config::{DEFAULT_POOL_CAPACITY, PoolConfig};
use crate::error::PoolError;

/// A bounded pool of reusable [`Buffer`]s.
///
/// The pool is pre-filled with `capacity` empty buffers. [`acquire`] pops one
/// without blocking, or allocates a fresh buffer when the pool is empty.
/// [`release`] resets a buffer and pushes it back without blocking, or drops
/// it when the pool is already full. Neither operation fails.
///
/// `BufferPool` is `Send + Sync`; share it by reference or behind an `Arc`.
///
/// # Example
///
/// ```
/// use bytepool::BufferPool;
///
/// let pool = BufferPool::new(2);
///
/// let mut buf = pool.acquire();
/// buf.write_str("hello");
/// assert_eq!(buf.as_str()?, "hello");
///
/// pool.release(buf);
/// assert!(pool.acquire().is_empty());
/// # Ok::<(), bytepool::PoolError>(())
/// ```
///
/// [`acquire`]: BufferPool::acquire
/// [`release`]: BufferPool::release
pub struct BufferPool {
    /// `None` when the pool was built with zero capacity.
    available: Option<ArrayQueue<Buffer>>,
    config: PoolConfig,
    /// Acquires that had to allocate because the pool was empty.
    exhausted: AtomicUsize,
    hits: AtomicUsize,
    returns: AtomicUsize,
    drops: AtomicUsize,
}

impl BufferPool {
    /// Creates a pool holding `capacity` buffers, all allocated up front.
    ///
    /// A capacity of zero is accepted: such a pool allocates on every acquire
    /// and drops on every release.
    pub fn new(capacity: usize) -> Self {
        Self::build(PoolConfig::new(capacity))
    }

    /// Creates a pool with [`DEFAULT_POOL_CAPACITY`] buffers.
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }

    /// Creates a pool from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `config` fails
    /// [`PoolConfig::validate`].
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PoolConfig) -> Self {
        let capacity = config.capacity();
        // ArrayQueue rejects a zero capacity
        let available = (capacity > 0).then(|| {
            let queue = ArrayQueue::new(capacity);
            for _ in 0..capacity {
                // sized for exactly `capacity` buffers, so every push lands
                let _ = queue.push(Buffer::with_capacity(config.buffer_capacity()));
            }
            queue
        });

        debug!(
            capacity,
            buffer_capacity = config.buffer_capacity(),
            max_retained_capacity = ?config.max_retained_capacity(),
            "buffer pool created"
        );

        Self {
            available,
            config,
            exhausted: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
            returns: AtomicUsize::new(0),
            drops: AtomicUsize::new(0),
        }
    }

    /// Takes a buffer from the pool, or allocates a new one if the pool is
    /// empty. Never blocks.
    ///
    /// The returned buffer is always empty. Hand it back with
    /// [`release`](Self::release) once done.
    #[inline]
    pub fn acquire(&self) -> Buffer {
        if let Some(buf) = self.available.as_ref().and_then(ArrayQueue::pop) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return buf;
        }

        let exhausted = self.exhausted.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        trace!(exhausted, "buffer pool empty, allocating");
        Buffer::with_capacity(self.config.buffer_capacity())
    }

    /// Takes a buffer wrapped in a guard that releases it on drop.
    ///
    /// # Example
    ///
    /// ```
    /// use bytepool::BufferPool;
    ///
    /// let pool = BufferPool::new(1);
    /// {
    ///     let mut buf = pool.acquire_pooled();
    ///     buf.write(b"scratch");
    ///     assert_eq!(pool.available(), 0);
    /// }
    /// assert_eq!(pool.available(), 1);
    /// ```
    #[inline]
    pub fn acquire_pooled(&self) -> PooledBuffer<'_> {
        PooledBuffer::new(self, self.acquire())
    }

    /// Resets `buf` and returns it to the pool. Never blocks.
    ///
    /// The buffer is dropped instead when the pool is full, or when it grew
    /// past the configured
    /// [`max_retained_capacity`](PoolConfig::max_retained_capacity).
    #[inline]
    pub fn release(&self, mut buf: Buffer) {
        buf.reset();

        if let Some(limit) = self.config.max_retained_capacity() {
            if buf.capacity() > limit {
                self.drops.fetch_add(1, Ordering::Relaxed);
                trace!(capacity = buf.capacity(), limit, "dropping oversized buffer");
                return;
            }
        }

        let Some(queue) = &self.available else {
            self.drops.fetch_add(1, Ordering::Relaxed);
            return;
        };

        if queue.push(buf).is_ok() {
            self.returns.fetch_add(1, Ordering::Relaxed);
        } else {
            self.drops.fetch_add(1, Ordering::Relaxed);
            trace!(capacity = self.config.capacity(), "buffer pool full, dropping buffer");
        }
    }

    /// Returns the maximum number of buffers the pool holds.
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Returns the number of buffers currently waiting in the pool.
    #[inline]
    pub fn available(&self) -> usize {
        self.available.as_ref().map_or(0, ArrayQueue::len)
    }

    /// Returns how many acquires allocated a fresh buffer because the pool
    /// was empty.
    pub fn exhausted(&self) -> usize {
        self.exhausted.load(Ordering::Relaxed)
    }

    /// Returns the configuration this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns a snapshot of the pool counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: self.capacity(),
            available: self.available(),
            hits: self.hits.load(Ordering::Relaxed),
            exhausted: self.exhausted(),
            returns: self.returns.load(Ordering::Relaxed),
            drops: self.drops.load(Ordering::Relaxed),
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Snapshot of pool counters.
///
/// Counters are read independently, so a snapshot taken while other threads
/// use the pool may be slightly inconsistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Maximum buffers the pool holds.
    pub capacity: usize,
    /// Buffers currently in the pool.
    pub available: usize,
    /// Acquires served from the pool.
    pub hits: usize,
    /// Acquires that allocated because the pool was empty.
    pub exhausted: usize,
    /// Releases that put the buffer back in the pool.
    pub returns: usize,
    /// Releases that dropped the buffer.
    pub drops: usize,
}

impl PoolStats {
    /// Fraction of acquires served from the pool (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.exhausted;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
