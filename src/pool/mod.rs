//! Buffer pooling.
//!
//! - [`BufferPool`] - Bounded lock-free store with non-blocking acquire/release
//! - [`PooledBuffer`] - Guard that releases its buffer on drop
//! - [`PoolStats`] - Counter snapshot

mod guard;
mod store;

pub use guard::PooledBuffer;
pub use store::{BufferPool, PoolStats};
