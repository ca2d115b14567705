//! Sample-wise processing
//!
//! Elementwise operations that return new buffers.

mod volume;

pub use volume::adjust_volume;
