//! audiocut - Sample-accurate audio splitting
//!
//! Splits multi-channel audio buffers into contiguous, independently owned
//! segments:
//! - at explicit time points (`split::Segmenter`), with sorting,
//!   de-duplication and minimum-interval suppression
//! - into equal-duration chunks (`split::UniformSplitter`)
//!
//! Volume scaling and WAV I/O sit alongside as thin helpers.
//!
//! # Example
//! ```
//! use audiocut::engine::AudioBuffer;
//! use audiocut::split::split_at_time_points;
//!
//! let buffer = AudioBuffer::new(2, 5 * 44100, 44100);
//! let segments = split_at_time_points(&buffer, &[4.0, 1.0, 3.0]).unwrap();
//! assert_eq!(segments.len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod split;

pub use config::SplitConfig;
pub use engine::AudioBuffer;
pub use error::{AudioCutError, Result};
pub use split::{split_at_time_points, split_by_duration, Segmenter, UniformSplitter};
