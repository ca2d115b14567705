//! Time-point segmentation
//!
//! Cuts a buffer at arbitrary instants. The requested times are validated,
//! sorted and deduplicated, bracketed by `0` and the buffer duration, and
//! every adjacent pair becomes one segment unless the pair is closer than
//! the configured minimum interval.
//!
//! A suppressed pair contributes nothing: its samples are dropped rather
//! than merged into a neighbour, so the output can be shorter than the
//! source by the width of every suppressed interval.

use crate::config::SplitConfig;
use crate::engine::AudioBuffer;
use crate::error::{AudioCutError, Result};

/// A planned cut: the half-open sample range `[start_sample, end_sample)`
/// and the boundary times it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRange {
    pub start_secs: f64,
    pub end_secs: f64,
    pub start_sample: usize,
    pub end_sample: usize,
}

impl SegmentRange {
    /// Number of samples per channel in the segment
    #[inline]
    pub fn len(&self) -> usize {
        self.end_sample - self.start_sample
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of the boundary pair in seconds
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

/// Splits audio buffers at explicit time points
///
/// Stateless apart from its thresholds; one instance can be shared across
/// threads and reused for any number of buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    config: SplitConfig,
}

impl Segmenter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split `buffer` at `time_points` (seconds)
    ///
    /// The points may be unsorted and may repeat. An empty list returns a
    /// single copy of the source.
    ///
    /// # Errors
    /// * `MissingBuffer` - If the buffer has no channels
    /// * `InvalidAudio` - If the buffer has ragged channels or a zero sample rate
    /// * `InvalidInput` - If a time point is NaN or infinite
    /// * `NegativeTimePoint` - If a time point is below zero
    /// * `TimePointExceedsDuration` - If a time point is past the end of the buffer
    pub fn split(&self, buffer: &AudioBuffer, time_points: &[f64]) -> Result<Vec<AudioBuffer>> {
        self.validate(buffer, time_points)?;

        if time_points.is_empty() {
            return Ok(vec![buffer.clone()]);
        }

        let ranges = self.ranges(buffer, time_points);
        tracing::debug!(
            requested = time_points.len(),
            segments = ranges.len(),
            "splitting at time points"
        );

        Ok(ranges
            .iter()
            .map(|range| buffer.copy_range(range.start_sample, range.end_sample))
            .collect())
    }

    /// Compute the segment ranges `split` would produce, without copying samples
    ///
    /// An empty list yields one range covering the whole buffer.
    pub fn plan(&self, buffer: &AudioBuffer, time_points: &[f64]) -> Result<Vec<SegmentRange>> {
        self.validate(buffer, time_points)?;

        if time_points.is_empty() {
            return Ok(vec![SegmentRange {
                start_secs: 0.0,
                end_secs: buffer.duration_secs(),
                start_sample: 0,
                end_sample: buffer.len(),
            }]);
        }

        Ok(self.ranges(buffer, time_points))
    }

    /// Check the buffer shape and every time point against `[0, duration]`
    ///
    /// Range errors are reported in ascending time order: the smallest
    /// negative point wins, otherwise the smallest point past the end.
    /// Runs before anything is allocated so a failed call returns no output.
    pub fn validate(&self, buffer: &AudioBuffer, time_points: &[f64]) -> Result<()> {
        buffer.check_shape()?;

        if let Some(&value) = time_points.iter().find(|v| !v.is_finite()) {
            return Err(AudioCutError::InvalidInput { value });
        }

        let duration = buffer.duration_secs();
        let smallest = time_points.iter().copied().fold(f64::INFINITY, f64::min);
        if smallest < 0.0 {
            return Err(AudioCutError::NegativeTimePoint {
                value: smallest,
                duration,
            });
        }

        if let Some(value) = time_points
            .iter()
            .copied()
            .filter(|&v| v > duration)
            .reduce(f64::min)
        {
            return Err(AudioCutError::TimePointExceedsDuration { value, duration });
        }

        Ok(())
    }

    /// Convert a strictly ascending boundary list into sample ranges
    ///
    /// Pairs strictly narrower than the minimum interval are skipped.
    ///
    /// Interior boundaries map to `floor(secs * sample_rate)`, clamped to the
    /// buffer length. A boundary equal to the buffer duration maps to
    /// `buffer.len()` directly rather than `floor(duration * sample_rate)`:
    /// `len / rate * rate` can land just below `len` in floating point, and
    /// flooring it would drop the final sample (e.g. 199 samples at 99 Hz).
    pub fn boundaries_to_ranges(
        &self,
        buffer: &AudioBuffer,
        boundaries: &[f64],
    ) -> Vec<SegmentRange> {
        let len = buffer.len();
        let duration = buffer.duration_secs();
        let sample_rate = buffer.sample_rate as f64;

        let to_sample = |secs: f64| -> usize {
            if secs >= duration {
                len
            } else {
                ((secs * sample_rate).floor() as usize).min(len)
            }
        };

        boundaries
            .windows(2)
            .filter_map(|pair| {
                let (start, end) = (pair[0], pair[1]);
                if end - start < self.config.min_interval_secs {
                    tracing::warn!(
                        start,
                        end,
                        min_interval = self.config.min_interval_secs,
                        "dropping interval shorter than minimum"
                    );
                    return None;
                }

                let start_sample = to_sample(start);
                Some(SegmentRange {
                    start_secs: start,
                    end_secs: end,
                    start_sample,
                    end_sample: to_sample(end).max(start_sample),
                })
            })
            .collect()
    }

    fn ranges(&self, buffer: &AudioBuffer, time_points: &[f64]) -> Vec<SegmentRange> {
        let boundaries = normalize_boundaries(time_points, buffer.duration_secs());
        self.boundaries_to_ranges(buffer, &boundaries)
    }
}

/// Build the sorted, duplicate-free boundary list `{0} ∪ points ∪ {duration}`
///
/// Duplicates are removed by exact equality only; the result always starts
/// at `0` and ends at `duration`.
pub fn normalize_boundaries(time_points: &[f64], duration: f64) -> Vec<f64> {
    let mut boundaries = Vec::with_capacity(time_points.len() + 2);
    boundaries.push(0.0);
    boundaries.extend_from_slice(time_points);
    boundaries.push(duration);

    boundaries.sort_by(f64::total_cmp);
    boundaries.dedup();
    boundaries
}

/// Split `buffer` at `time_points` with the default thresholds
pub fn split_at_time_points(
    buffer: &AudioBuffer,
    time_points: &[f64],
) -> Result<Vec<AudioBuffer>> {
    Segmenter::default().split(buffer, time_points)
}

// ============================================================================
// Tests
// ============================================================================
