//! Reusable byte buffers.
//!
//! - [`Buffer`] - Growable byte container with append/set/reset and
//!   zero-copy string views

mod data;

pub use data::Buffer;
