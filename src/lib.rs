//! bytepool
//!
//! A bounded, thread-safe pool of reusable byte buffers.
//!
//! Code that repeatedly builds and discards byte sequences (serialization,
//! I/O framing) can take a [`Buffer`] from a [`BufferPool`], fill it, consume
//! it and hand it back, so the allocation is reused instead of freed.
//!
//! The crate intentionally:
//! - does NOT block: acquire allocates when the pool is empty, release drops
//!   when it is full
//! - does NOT fail on the hot path: acquire and release have no error cases
//! - does NOT keep a global pool: callers own and share their pools
//! - does NOT evict by age or size class
//!
//! # Example
//!
//! ```
//! use bytepool::{BufferPool, PoolError};
//!
//! fn main() -> Result<(), PoolError> {
//!     let pool = BufferPool::new(16);
//!
//!     let mut buf = pool.acquire();
//!     buf.write_str("id=").write(b"42").write_byte(b';');
//!     assert_eq!(buf.str_view()?, ("id=42;", 6));
//!
//!     pool.release(buf);
//!     Ok(())
//! }
//! ```
//!
//! # Sharing across threads
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use bytepool::BufferPool;
//!
//! let pool = Arc::new(BufferPool::new(4));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let pool = Arc::clone(&pool);
//!         thread::spawn(move || {
//!             let mut buf = pool.acquire_pooled();
//!             buf.write_str(&format!("worker {i}"));
//!             buf.len()
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert!(handle.join().unwrap() > 0);
//! }
//! assert!(pool.available() <= pool.capacity());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod pool;

//
// Public surface
//

pub use buffer::Buffer;
pub use config::{DEFAULT_BUFFER_CAPACITY, DEFAULT_POOL_CAPACITY, PoolConfig};
pub use error::PoolError;
pub use pool::{BufferPool, PoolStats, PooledBuffer};
