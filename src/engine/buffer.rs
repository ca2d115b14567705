//! Audio Buffer
//!
//! Provides the core audio buffer type shared by the splitters, the volume
//! scaler and the WAV I/O layer. Samples are stored non-interleaved as
//! 32-bit floats, one `Vec<f32>` per channel.

use crate::error::{AudioCutError, Result};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert linear amplitude to decibels
///
/// # Returns
/// Value in decibels. Returns -f32::INFINITY for zero input.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * linear.log10()
    }
}

/// Calculate the RMS (Root Mean Square) level of an audio buffer in dB
///
/// Returns -f32::INFINITY for empty or silent buffers.
pub fn calculate_rms(buffer: &AudioBuffer) -> f32 {
    let total_samples = buffer.num_channels() * buffer.len();
    if total_samples == 0 {
        return f32::NEG_INFINITY;
    }

    let sum_squares: f64 = buffer
        .samples
        .iter()
        .flat_map(|channel| channel.iter())
        .map(|&s| (s as f64) * (s as f64))
        .sum();

    let rms = (sum_squares / total_samples as f64).sqrt() as f32;
    linear_to_db(rms)
}

/// Calculate the peak level of an audio buffer in dB
///
/// Returns -f32::INFINITY for empty buffers.
pub fn calculate_peak(buffer: &AudioBuffer) -> f32 {
    let peak = buffer
        .samples
        .iter()
        .flat_map(|channel| channel.iter())
        .map(|&s| s.abs())
        .fold(0.0_f32, f32::max);

    linear_to_db(peak)
}

// ============================================================================
// Audio Buffer
// ============================================================================

/// Multi-channel audio buffer at a fixed sample rate
///
/// Every channel holds the same number of samples. Buffers produced by the
/// splitters own their storage and never alias the source.
///
/// # Example
/// ```
/// use audiocut::engine::buffer::AudioBuffer;
///
/// // 1 second of stereo silence at 44.1kHz
/// let buffer = AudioBuffer::new(2, 44100, 44100);
/// assert_eq!(buffer.num_channels(), 2);
/// assert_eq!(buffer.len(), 44100);
/// assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AudioBuffer {
    /// Sample data: outer Vec is channels, inner Vec is samples
    pub samples: Vec<Vec<f32>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a zeroed buffer with the given shape
    ///
    /// # Arguments
    /// * `num_channels` - Number of channels
    /// * `num_samples` - Number of samples per channel
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(num_channels: usize, num_samples: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![vec![0.0_f32; num_samples]; num_channels],
            sample_rate,
        }
    }

    /// Create a buffer from per-channel sample vectors
    ///
    /// # Errors
    /// * `MissingBuffer` - If `channels` is empty
    /// * `InvalidAudio` - If channel lengths differ or the sample rate is zero
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        let buffer = Self {
            samples: channels,
            sample_rate,
        };
        buffer.check_shape()?;
        Ok(buffer)
    }

    /// Create an audio buffer from interleaved sample data
    ///
    /// # Arguments
    /// * `interleaved` - Interleaved sample data (L, R, L, R, ... for stereo)
    /// * `num_channels` - Number of interleaved channels
    /// * `sample_rate` - Sample rate in Hz
    pub fn from_interleaved(
        interleaved: &[f32],
        num_channels: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        if num_channels == 0 {
            return Err(AudioCutError::MissingBuffer);
        }

        if interleaved.len() % num_channels != 0 {
            return Err(AudioCutError::invalid_audio(format!(
                "Interleaved data length {} is not divisible by channel count {}",
                interleaved.len(),
                num_channels
            )));
        }

        let num_samples = interleaved.len() / num_channels;
        let mut samples = vec![Vec::with_capacity(num_samples); num_channels];

        for frame in interleaved.chunks_exact(num_channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                samples[ch].push(sample);
            }
        }

        Self::from_channels(samples, sample_rate)
    }

    /// Convert the buffer to interleaved format
    pub fn to_interleaved(&self) -> Vec<f32> {
        let num_channels = self.num_channels();
        let num_samples = self.len();

        let mut interleaved = Vec::with_capacity(num_channels * num_samples);
        for sample_idx in 0..num_samples {
            for channel in &self.samples {
                interleaved.push(channel[sample_idx]);
            }
        }

        interleaved
    }

    /// Get the number of channels
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.samples.len()
    }

    /// Get the number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the buffer is empty (no samples)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the duration in seconds
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.samples[index]
    }

    /// Get mutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel_mut(&mut self, index: usize) -> &mut [f32] {
        &mut self.samples[index]
    }

    /// Get a sample at the specified channel and index
    #[inline]
    pub fn get_sample(&self, channel: usize, index: usize) -> Option<f32> {
        self.samples
            .get(channel)
            .and_then(|ch| ch.get(index).copied())
    }

    /// Copy the sample range `[start, end)` of every channel into a new buffer
    ///
    /// Both ends are clamped to the buffer length; an inverted range yields
    /// an empty buffer with the same channel count and sample rate.
    pub fn copy_range(&self, start: usize, end: usize) -> AudioBuffer {
        let len = self.len();
        let end = end.min(len);
        let start = start.min(end);

        let mut segment = AudioBuffer::new(self.num_channels(), end - start, self.sample_rate);
        for (ch, source) in self.samples.iter().enumerate() {
            segment.channel_mut(ch).copy_from_slice(&source[start..end]);
        }
        segment
    }

    /// Verify the buffer invariants the splitters rely on
    ///
    /// # Errors
    /// * `MissingBuffer` - If the buffer has no channels
    /// * `InvalidAudio` - If the sample rate is zero or channel lengths differ
    pub fn check_shape(&self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(AudioCutError::MissingBuffer);
        }

        if self.sample_rate == 0 {
            return Err(AudioCutError::invalid_audio("Sample rate must be positive"));
        }

        let expected = self.len();
        if let Some((ch, channel)) = self
            .samples
            .iter()
            .enumerate()
            .find(|(_, channel)| channel.len() != expected)
        {
            return Err(AudioCutError::invalid_audio(format!(
                "Channel {} has {} samples, expected {}",
                ch,
                channel.len(),
                expected
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
