//! Integration Tests
//!
//! End-to-end tests for the audiocut splitting pipeline.

use approx::assert_abs_diff_eq;
use tempfile::tempdir;

use audiocut::dsp::adjust_volume;
use audiocut::engine::{export_audio, export_segments, import_audio, AudioBuffer, ExportFormat};
use audiocut::split::{split_at_time_points, split_by_duration, Segmenter};
use audiocut::{AudioCutError, SplitConfig};

/// Helper to create a multi-channel buffer where every sample encodes its
/// own index, so any misplaced copy is visible
fn indexed_buffer(channels: usize, duration_secs: f64, sample_rate: u32) -> AudioBuffer {
    let len = (duration_secs * sample_rate as f64) as usize;
    let data = (0..channels)
        .map(|ch| (0..len).map(|i| (ch * 1_000_000 + i) as f32).collect())
        .collect();
    AudioBuffer::from_channels(data, sample_rate).unwrap()
}

// === Time-point Splitting ===

#[test]
fn test_segments_reconstruct_source() {
    let buffer = indexed_buffer(3, 4.0, 8000);
    let segments = split_at_time_points(&buffer, &[3.3, 0.125, 2.0, 2.0, 4.0]).unwrap();

    assert_eq!(segments.len(), 4);
    for ch in 0..3 {
        let joined: Vec<f32> = segments
            .iter()
            .flat_map(|s| s.channel(ch).iter().copied())
            .collect();
        assert_eq!(joined.as_slice(), buffer.channel(ch));
    }
}

#[test]
fn test_durations_sum_to_source_minus_suppressed() {
    let buffer = indexed_buffer(2, 3.0, 44100);
    let segments = split_at_time_points(&buffer, &[1.0, 1.0005, 2.0]).unwrap();

    let total: f64 = segments.iter().map(|s| s.duration_secs()).sum();
    assert_abs_diff_eq!(total, 3.0 - 0.0005, epsilon = 1.0 / 44100.0);
}

#[test]
fn test_segments_are_in_time_order() {
    let buffer = indexed_buffer(1, 5.0, 1000);
    let segments = split_at_time_points(&buffer, &[4.0, 1.0, 3.0]).unwrap();

    let starts: Vec<f32> = segments.iter().map(|s| s.channel(0)[0]).collect();
    assert_eq!(starts, vec![0.0, 1000.0, 3000.0, 4000.0]);
}

#[test]
fn test_plan_matches_split() {
    let buffer = indexed_buffer(2, 2.0, 22050);
    let segmenter = Segmenter::default();
    let points = [0.7, 1.3];

    let ranges = segmenter.plan(&buffer, &points).unwrap();
    let segments = segmenter.split(&buffer, &points).unwrap();

    assert_eq!(ranges.len(), segments.len());
    for (range, segment) in ranges.iter().zip(&segments) {
        assert_eq!(range.len(), segment.len());
        assert_eq!(segment.channel(1)[0], buffer.channel(1)[range.start_sample]);
    }
}

#[test]
fn test_failed_split_reports_out_of_range() {
    let buffer = indexed_buffer(2, 3.0, 44100);
    let err = split_at_time_points(&buffer, &[1.0, 3.5]).unwrap_err();

    assert_eq!(err.error_code(), "OUT_OF_RANGE");
    assert_eq!(err.to_string(), "Time point 3.5 exceeds audio duration 3");
}

// === Uniform Splitting ===

#[test]
fn test_uniform_and_time_point_agree_on_whole_seconds() {
    let buffer = indexed_buffer(2, 4.0, 8000);
    let uniform = split_by_duration(&buffer, 1.0).unwrap();
    let pointed = split_at_time_points(&buffer, &[1.0, 2.0, 3.0]).unwrap();

    assert_eq!(uniform, pointed);
}

#[test]
fn test_uniform_respects_config_minimum() {
    let buffer = indexed_buffer(1, 1.0, 8000);
    let splitter = audiocut::UniformSplitter::new(SplitConfig {
        min_split_secs: 0.5,
        ..SplitConfig::default()
    });

    assert!(matches!(
        splitter.split(&buffer, 0.25),
        Err(AudioCutError::InvalidInterval { .. })
    ));
}

// === File Pipeline ===

#[test]
fn test_wav_split_pipeline() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.wav");
    let source = indexed_buffer(2, 2.0, 8000);
    export_audio(&source, &input, ExportFormat::float()).unwrap();

    let imported = import_audio(&input).unwrap();
    let segments = split_at_time_points(&imported, &[0.5, 1.5]).unwrap();
    let parts = dir.path().join("parts");
    let paths = export_segments(&segments, &parts, "input", ExportFormat::float()).unwrap();

    assert_eq!(paths.len(), 3);
    let lengths: Vec<usize> = paths
        .iter()
        .map(|p| import_audio(p).unwrap().len())
        .collect();
    assert_eq!(lengths, vec![4000, 8000, 4000]);
}

#[test]
fn test_volume_then_split_keeps_scaled_content() {
    let buffer = indexed_buffer(1, 1.0, 1000);
    let quiet = adjust_volume(&buffer, 0.5).unwrap();
    let segments = split_at_time_points(&quiet, &[0.5]).unwrap();

    assert_eq!(segments[1].channel(0)[0], 250.0);
}
