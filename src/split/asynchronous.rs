//! Async adapters
//!
//! Splitting never blocks on I/O, but it is proportional to the sample
//! count, so event-loop callers hand the buffer to tokio's blocking pool
//! instead of running it on a worker thread.

use crate::engine::AudioBuffer;
use crate::error::{AudioCutError, Result};
use crate::split::{Segmenter, UniformSplitter};

fn join_error(e: tokio::task::JoinError) -> AudioCutError {
    AudioCutError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("split task failed: {}", e),
    ))
}

/// Async form of [`Segmenter::split`]
pub async fn split_at_time_points_async(
    segmenter: Segmenter,
    buffer: AudioBuffer,
    time_points: Vec<f64>,
) -> Result<Vec<AudioBuffer>> {
    tokio::task::spawn_blocking(move || segmenter.split(&buffer, &time_points))
        .await
        .map_err(join_error)?
}

/// Async form of [`UniformSplitter::split`]
pub async fn split_by_duration_async(
    splitter: UniformSplitter,
    buffer: AudioBuffer,
    split_secs: f64,
) -> Result<Vec<AudioBuffer>> {
    tokio::task::spawn_blocking(move || splitter.split(&buffer, split_secs))
        .await
        .map_err(join_error)?
}
