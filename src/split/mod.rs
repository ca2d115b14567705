//! Splitters
//!
//! - Time-point segmentation (`Segmenter`)
//! - Uniform-duration chunking (`UniformSplitter`)
//! - Async adapters (feature `async`)

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod duration;
pub mod time_points;

#[cfg(feature = "async")]
pub use asynchronous::{split_at_time_points_async, split_by_duration_async};
pub use duration::{split_by_duration, UniformSplitter};
pub use time_points::{normalize_boundaries, split_at_time_points, SegmentRange, Segmenter};
