//! Audio file I/O
//!
//! Imports and exports WAV files with `hound`. Audio keeps its native
//! sample rate and channel count; nothing is resampled.

use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::engine::buffer::AudioBuffer;
use crate::error::{AudioCutError, Result};

/// Export format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormat {
    /// Bit depth: 16, 24 (integer) or 32 (float). Default: 24
    pub bit_depth: u16,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat { bit_depth: 24 }
    }
}

impl ExportFormat {
    /// Create a new export format with the given bit depth
    pub fn new(bit_depth: u16) -> Self {
        ExportFormat { bit_depth }
    }

    /// 32-bit float, lossless for in-memory buffers
    pub fn float() -> Self {
        ExportFormat { bit_depth: 32 }
    }
}

/// Import a WAV file as an `AudioBuffer`
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidAudio` - If the file is not a valid WAV file
/// * `UnsupportedFormat` - If the bit depth cannot be decoded
/// * `EmptyAudio` - If the file holds no samples
pub fn import_audio(path: &Path) -> Result<AudioBuffer> {
    if !path.exists() {
        return Err(AudioCutError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = WavReader::open(path).map_err(|e| AudioCutError::InvalidAudio {
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();
    let channels = spec.channels as usize;
    let samples = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;

    if samples.is_empty() {
        return Err(AudioCutError::EmptyAudio);
    }

    let buffer = AudioBuffer::from_interleaved(&samples, channels, spec.sample_rate)?;
    tracing::debug!(
        path = %path.display(),
        channels,
        sample_rate = spec.sample_rate,
        samples = buffer.len(),
        "imported audio"
    );

    Ok(buffer)
}

/// Export an `AudioBuffer` to a WAV file at its own sample rate
///
/// # Errors
/// * `UnsupportedFormat` - If the bit depth is not 16, 24 or 32
/// * `Io` - If the file cannot be written
pub fn export_audio(buffer: &AudioBuffer, path: &Path, format: ExportFormat) -> Result<()> {
    buffer.check_shape()?;

    let sample_format = match format.bit_depth {
        16 | 24 => SampleFormat::Int,
        32 => SampleFormat::Float,
        other => {
            return Err(AudioCutError::UnsupportedFormat {
                format: format!("{}-bit audio (only 16, 24, 32 supported)", other),
            });
        }
    };

    let spec = WavSpec {
        channels: buffer.num_channels() as u16,
        sample_rate: buffer.sample_rate,
        bits_per_sample: format.bit_depth,
        sample_format,
    };

    let mut writer = WavWriter::create(path, spec).map_err(hound_to_io)?;
    let interleaved = buffer.to_interleaved();

    match format.bit_depth {
        16 => {
            for sample in interleaved {
                let scaled = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
                writer.write_sample(scaled).map_err(hound_to_io)?;
            }
        }
        24 => {
            for sample in interleaved {
                // 24-bit stored as i32 in hound
                let scaled = (sample * 8388607.0).clamp(-8388608.0, 8388607.0) as i32;
                writer.write_sample(scaled).map_err(hound_to_io)?;
            }
        }
        _ => {
            for sample in interleaved {
                writer.write_sample(sample).map_err(hound_to_io)?;
            }
        }
    }

    writer.finalize().map_err(hound_to_io)?;
    Ok(())
}

/// Write each segment to `<dir>/<stem>_<NNN>.wav`
///
/// Numbering is 1-based and zero-padded to three digits. The directory is
/// created if needed.
///
/// # Returns
/// The written paths, in segment order
pub fn export_segments(
    segments: &[AudioBuffer],
    dir: &Path,
    stem: &str,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let path = dir.join(format!("{}_{:03}.wav", stem, i + 1));
        export_audio(segment, &path, format)?;
        paths.push(path);
    }

    tracing::info!(count = paths.len(), dir = %dir.display(), "exported segments");
    Ok(paths)
}

/// Generate a mono sine wave
///
/// # Arguments
/// * `frequency` - Frequency of the sine wave in Hz
/// * `duration_secs` - Duration of the tone in seconds
/// * `sample_rate` - Sample rate in Hz
pub fn generate_test_tone(frequency: f32, duration_secs: f64, sample_rate: u32) -> AudioBuffer {
    let num_samples = (duration_secs * sample_rate as f64) as usize;
    let mut buffer = AudioBuffer::new(1, num_samples, sample_rate);

    let angular_freq = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;
    for (i, sample) in buffer.channel_mut(0).iter_mut().enumerate() {
        *sample = (angular_freq * i as f32).sin();
    }

    buffer
}

/// Generate a stereo buffer with a different sine wave per channel
pub fn generate_stereo_test_tone(
    freq_left: f32,
    freq_right: f32,
    duration_secs: f64,
    sample_rate: u32,
) -> AudioBuffer {
    let num_samples = (duration_secs * sample_rate as f64) as usize;
    let mut buffer = AudioBuffer::new(2, num_samples, sample_rate);

    for (ch, freq) in [freq_left, freq_right].into_iter().enumerate() {
        let angular_freq = 2.0 * std::f32::consts::PI * freq / sample_rate as f32;
        for (i, sample) in buffer.channel_mut(ch).iter_mut().enumerate() {
            *sample = (angular_freq * i as f32).sin();
        }
    }

    buffer
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn hound_to_io(e: hound::Error) -> AudioCutError {
    match e {
        hound::Error::IoError(io) => AudioCutError::Io(io),
        other => AudioCutError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            other.to_string(),
        )),
    }
}

/// Read samples from WAV reader and convert to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    let scale = match (sample_format, bits_per_sample) {
        (SampleFormat::Float, _) => {
            return reader
                .samples::<f32>()
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| read_error(bits_per_sample, e));
        }
        (SampleFormat::Int, 8) => 128.0,
        (SampleFormat::Int, 16) => 32768.0,
        (SampleFormat::Int, 24) => 8388608.0,
        (SampleFormat::Int, 32) => 2147483648.0,
        (SampleFormat::Int, bits) => {
            return Err(AudioCutError::UnsupportedFormat {
                format: format!("{}-bit integer audio", bits),
            });
        }
    };

    // hound widens every integer depth to i32
    reader
        .samples::<i32>()
        .map(|s| s.map(|v| (v as f64 / scale) as f32))
        .collect::<std::result::Result<Vec<f32>, _>>()
        .map_err(|e| read_error(bits_per_sample, e))
}

fn read_error(bits_per_sample: u16, e: hound::Error) -> AudioCutError {
    AudioCutError::InvalidAudio {
        reason: format!("Failed to read {}-bit samples: {}", bits_per_sample, e),
        source: Some(Box::new(e)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn test_generate_test_tone() {
        let buffer = generate_test_tone(440.0, 1.0, 48000);

        assert_eq!(buffer.len(), 48000);
        assert_eq!(buffer.num_channels(), 1);

        // Half a cycle in, the sine is back near zero
        let half_cycle = (48000.0 / 440.0 / 2.0) as usize;
        assert!(buffer.channel(0)[half_cycle].abs() < 0.1);
    }

    #[test]
    fn test_generate_stereo_test_tone() {
        let buffer = generate_stereo_test_tone(440.0, 880.0, 0.5, 48000);

        assert_eq!(buffer.len(), 24000);
        assert_eq!(buffer.num_channels(), 2);
        assert!((buffer.channel(0)[100] - buffer.channel(1)[100]).abs() > 0.01);
    }

    #[test]
    fn test_export_import_float_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let original = generate_stereo_test_tone(440.0, 660.0, 0.25, 44100);

        export_audio(&original, &path, ExportFormat::float()).unwrap();
        let imported = import_audio(&path).unwrap();

        assert_eq!(imported.sample_rate, 44100);
        assert_eq!(imported.num_channels(), 2);
        assert_eq!(imported, original);
    }

    #[test]
    fn test_export_import_16bit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone16.wav");
        let original = generate_test_tone(440.0, 0.2, 22050);

        export_audio(&original, &path, ExportFormat::new(16)).unwrap();
        let imported = import_audio(&path).unwrap();

        assert_eq!(imported.len(), original.len());
        for (a, b) in original.channel(0).iter().zip(imported.channel(0)) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_export_unsupported_bit_depth() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.wav");
        let buffer = generate_test_tone(440.0, 0.1, 8000);

        let result = export_audio(&buffer, &path, ExportFormat::new(12));
        assert!(matches!(
            result,
            Err(AudioCutError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_import_missing_file() {
        let result = import_audio(Path::new("/nonexistent/file.wav"));
        assert!(matches!(result, Err(AudioCutError::FileNotFound { .. })));
    }

    #[test]
    fn test_import_not_a_wav() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("junk.wav");
        fs::write(&path, b"definitely not RIFF").unwrap();

        let result = import_audio(&path);
        assert!(matches!(result, Err(AudioCutError::InvalidAudio { .. })));
    }

    #[test]
    fn test_export_segments_naming() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("parts");
        let segments = vec![
            generate_test_tone(440.0, 0.1, 8000),
            generate_test_tone(440.0, 0.2, 8000),
        ];

        let paths = export_segments(&segments, &out, "take", ExportFormat::default()).unwrap();

        assert_eq!(paths, vec![out.join("take_001.wav"), out.join("take_002.wav")]);
        assert!(paths.iter().all(|p| p.exists()));
        assert_eq!(import_audio(&paths[1]).unwrap().len(), 1600);
    }
}
