//! Volume scaling
//!
//! Linear attenuation of a whole buffer by a ratio in `[0, 1]`.

use crate::engine::AudioBuffer;
use crate::error::{AudioCutError, Result};

/// Return a copy of `buffer` with every sample multiplied by `ratio`
///
/// # Arguments
/// * `buffer` - Source audio, left untouched
/// * `ratio` - Linear gain between 0.0 (silence) and 1.0 (unchanged)
///
/// # Errors
/// * `MissingBuffer` - If the buffer has no channels
/// * `InvalidVolumeRatio` - If `ratio` is outside `[0, 1]` or NaN
///
/// # Example
/// ```
/// use audiocut::dsp::adjust_volume;
/// use audiocut::engine::AudioBuffer;
///
/// let buffer = AudioBuffer::from_channels(vec![vec![0.8, -0.4]], 8000).unwrap();
/// let quieter = adjust_volume(&buffer, 0.5).unwrap();
/// assert_eq!(quieter.channel(0), &[0.4, -0.2]);
/// ```
pub fn adjust_volume(buffer: &AudioBuffer, ratio: f32) -> Result<AudioBuffer> {
    buffer.check_shape()?;

    if !(0.0..=1.0).contains(&ratio) {
        return Err(AudioCutError::InvalidVolumeRatio { ratio });
    }

    let mut adjusted = buffer.clone();

    // Unity gain: nothing to scale
    if ratio == 1.0 {
        return Ok(adjusted);
    }

    for channel in 0..adjusted.num_channels() {
        for sample in adjusted.channel_mut(channel).iter_mut() {
            *sample *= ratio;
        }
    }

    tracing::debug!(ratio, samples = adjusted.len(), "adjusted volume");
    Ok(adjusted)
}
