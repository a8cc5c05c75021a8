//! Configuration for pool construction.
//!
//! [`PoolConfig`] controls how many buffers the pool holds, how large each
//! pooled buffer starts out, and which buffers are too large to keep.
//!
//! # Example
//!
//! ```
//! use bytepool::{BufferPool, PoolConfig};
//!
//! let config = PoolConfig::new(64)
//!     .with_buffer_capacity(4096)
//!     .with_max_retained_capacity(64 * 1024);
//!
//! let pool = BufferPool::with_config(config)?;
//! assert_eq!(pool.capacity(), 64);
//!
//! # Ok::<(), bytepool::PoolError>(())
//! ```

use crate::error::PoolError;

/// Default number of buffers held by a pool.
pub const DEFAULT_POOL_CAPACITY: usize = 2000;

/// Default bytes reserved in each new buffer (none, buffers grow on demand).
pub const DEFAULT_BUFFER_CAPACITY: usize = 0;

/// Configuration for a [`BufferPool`](crate::BufferPool).
///
/// - `capacity` - Number of store slots; the pool is pre-filled with this many
///   buffers. Zero is allowed and gives a pool that never retains anything.
/// - `buffer_capacity` - Bytes reserved up front in every buffer the pool
///   allocates, pre-filled or fresh.
/// - `max_retained_capacity` - Optional upper bound on the capacity of a
///   released buffer; larger buffers are dropped instead of stored.
///
/// # Example
///
/// ```
/// use bytepool::PoolConfig;
///
/// let config = PoolConfig::default().with_capacity(16);
/// assert_eq!(config.capacity(), 16);
/// assert_eq!(config.max_retained_capacity(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    capacity: usize,
    buffer_capacity: usize,
    max_retained_capacity: Option<usize>,
}

impl PoolConfig {
    /// Creates a configuration holding `capacity` buffers, with defaults for
    /// everything else.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            max_retained_capacity: None,
        }
    }

    /// Sets the number of buffers the pool holds.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the bytes reserved in each buffer the pool allocates.
    pub fn with_buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = bytes;
        self
    }

    /// Drops released buffers whose capacity grew past `bytes`.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] or [`BufferPool::with_config`](crate::BufferPool::with_config).
    pub fn with_max_retained_capacity(mut self, bytes: usize) -> Self {
        self.max_retained_capacity = Some(bytes);
        self
    }

    /// Returns the number of buffers the pool holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the bytes reserved in each new buffer.
    pub fn buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }

    /// Returns the retention limit, if any.
    pub fn max_retained_capacity(&self) -> Option<usize> {
        self.max_retained_capacity
    }

    /// Validates the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the retention limit is zero or
    /// smaller than `buffer_capacity` (every buffer would be dropped on
    /// release).
    ///
    /// # Example
    ///
    /// ```
    /// use bytepool::PoolConfig;
    ///
    /// let config = PoolConfig::new(8)
    ///     .with_buffer_capacity(4096)
    ///     .with_max_retained_capacity(1024);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PoolError> {
        if let Some(limit) = self.max_retained_capacity {
            if limit == 0 {
                return Err(PoolError::InvalidConfig {
                    message: "max_retained_capacity must be non-zero",
                });
            }

            if limit < self.buffer_capacity {
                return Err(PoolError::InvalidConfig {
                    message: "max_retained_capacity cannot be less than buffer_capacity",
                });
            }
        }

        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.capacity(), DEFAULT_POOL_CAPACITY);
        assert_eq!(config.buffer_capacity(), DEFAULT_BUFFER_CAPACITY);
        assert_eq!(config.max_retained_capacity(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PoolConfig::default()
            .with_capacity(32)
            .with_buffer_capacity(512)
            .with_max_retained_capacity(8192);

        assert_eq!(config.capacity(), 32);
        assert_eq!(config.buffer_capacity(), 512);
        assert_eq!(config.max_retained_capacity(), Some(8192));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_valid() {
        assert!(PoolConfig::new(0).validate().is_ok());
    }

    #[test]
    fn test_invalid_config_zero_retention() {
        let config = PoolConfig::new(4).with_max_retained_capacity(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_config_retention_below_buffer_capacity() {
        let config = PoolConfig::new(4)
            .with_buffer_capacity(2048)
            .with_max_retained_capacity(1024);
        assert_eq!(
            config.validate(),
            Err(PoolError::InvalidConfig {
                message: "max_retained_capacity cannot be less than buffer_capacity",
            })
        );
    }
}
