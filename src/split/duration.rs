//! Uniform-duration splitting
//!
//! Cuts a buffer into consecutive chunks of equal length. The last chunk
//! holds whatever remains.

use crate::config::SplitConfig;
use crate::engine::AudioBuffer;
use crate::error::{AudioCutError, Result};

/// Chunk lengths within this many samples of an integer are snapped to it
const SAMPLE_SNAP_EPSILON: f64 = 1e-6;

/// Splits audio buffers into fixed-length chunks
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSplitter {
    config: SplitConfig,
}

impl UniformSplitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Split `buffer` into chunks of `split_secs` seconds
    ///
    /// Chunk `i` covers samples `[floor(i * n), floor((i + 1) * n))` where
    /// `n = split_secs * sample_rate`, with the final chunk cut at the end
    /// of the buffer.
    ///
    /// # Errors
    /// * `MissingBuffer` / `InvalidAudio` - If the buffer is malformed
    /// * `InvalidInterval` - If `split_secs` is below the configured minimum or not finite
    /// * `IntervalTooLarge` - If one chunk would be longer than the buffer
    pub fn split(&self, buffer: &AudioBuffer, split_secs: f64) -> Result<Vec<AudioBuffer>> {
        let bounds = self.chunk_bounds(buffer, split_secs)?;
        tracing::debug!(split_secs, chunks = bounds.len(), "splitting by duration");

        Ok(bounds
            .into_iter()
            .map(|(start, end)| buffer.copy_range(start, end))
            .collect())
    }

    /// Sample ranges `split` would produce, without copying samples
    pub fn chunk_bounds(
        &self,
        buffer: &AudioBuffer,
        split_secs: f64,
    ) -> Result<Vec<(usize, usize)>> {
        buffer.check_shape()?;

        let min_secs = self.config.min_split_secs;
        if !split_secs.is_finite() || split_secs < min_secs {
            return Err(AudioCutError::InvalidInterval {
                split_secs,
                min_secs,
            });
        }

        let total_samples = buffer.len();
        let split_samples = snap_to_sample(split_secs * buffer.sample_rate as f64);
        if split_samples > total_samples as f64 {
            return Err(AudioCutError::IntervalTooLarge {
                split_secs,
                duration: buffer.duration_secs(),
            });
        }

        let count = (total_samples as f64 / split_samples).ceil() as usize;
        let bound = |i: usize| ((i as f64 * split_samples).floor() as usize).min(total_samples);

        Ok((0..count)
            .map(|i| (bound(i), bound(i + 1)))
            .filter(|(start, end)| end > start)
            .collect())
    }
}

/// Round `samples` to the nearest integer when it only misses it by float error
///
/// `2.01 * 8000` evaluates to `16079.999999999998`; flooring that would shift
/// every boundary down a sample and leave a 1-sample tail chunk.
fn snap_to_sample(samples: f64) -> f64 {
    let rounded = samples.round();
    if (samples - rounded).abs() < SAMPLE_SNAP_EPSILON {
        rounded
    } else {
        samples
    }
}

/// Split `buffer` into `split_secs` chunks with the default thresholds
pub fn split_by_duration(buffer: &AudioBuffer, split_secs: f64) -> Result<Vec<AudioBuffer>> {
    UniformSplitter::default().split(buffer, split_secs)
}

// ============================================================================
// Tests
// ============================================================================
