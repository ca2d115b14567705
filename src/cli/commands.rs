//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::SplitConfig;
use crate::dsp::adjust_volume;
use crate::engine::{
    calculate_peak, calculate_rms, export_audio, export_segments, import_audio, ExportFormat,
};
use crate::error::Result;
use crate::split::{Segmenter, UniformSplitter};

/// Load the split thresholds, falling back to defaults
pub fn load_config(path: Option<&Path>) -> Result<SplitConfig> {
    match path {
        Some(path) => SplitConfig::load(path),
        None => Ok(SplitConfig::default()),
    }
}

/// Split a file at explicit time points.
pub fn split_at(
    input: &Path,
    time_points: &[f64],
    output: Option<&Path>,
    dry_run: bool,
    config: SplitConfig,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    info!("Splitting {} at {:?}", input.display(), time_points);

    let buffer = import_audio(input)?;
    let segmenter = Segmenter::new(config);

    if dry_run {
        let ranges = segmenter.plan(&buffer, time_points)?;
        println!("{:>4}  {:>10}  {:>10}  {:>10}", "#", "start (s)", "end (s)", "samples");
        for (i, range) in ranges.iter().enumerate() {
            println!(
                "{:>4}  {:>10.3}  {:>10.3}  {:>10}",
                i + 1,
                range.start_secs,
                range.end_secs,
                range.len()
            );
        }
        return Ok(Vec::new());
    }

    let segments = segmenter.split(&buffer, time_points)?;
    let paths = export_segments(&segments, &output_dir(input, output), &file_stem(input), format)?;
    print_written(&paths);
    Ok(paths)
}

/// Split a file into chunks of equal duration.
pub fn split_every(
    input: &Path,
    seconds: f64,
    output: Option<&Path>,
    config: SplitConfig,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    info!("Splitting {} every {}s", input.display(), seconds);

    let buffer = import_audio(input)?;
    let segments = UniformSplitter::new(config).split(&buffer, seconds)?;
    let paths = export_segments(&segments, &output_dir(input, output), &file_stem(input), format)?;
    print_written(&paths);
    Ok(paths)
}

/// Scale the volume of a file and write the result.
pub fn volume(input: &Path, ratio: f32, output: &Path, format: ExportFormat) -> Result<()> {
    info!("Scaling {} by {}", input.display(), ratio);

    let buffer = import_audio(input)?;
    let adjusted = adjust_volume(&buffer, ratio)?;
    export_audio(&adjusted, output, format)?;

    println!("Written: {}", output.display());
    Ok(())
}

/// Print buffer properties and levels.
pub fn show_info(input: &Path) -> Result<()> {
    let buffer = import_audio(input)?;

    println!("File:        {}", input.display());
    println!("Channels:    {}", buffer.num_channels());
    println!("Sample rate: {} Hz", buffer.sample_rate);
    println!("Length:      {} samples", buffer.len());
    println!("Duration:    {:.3} s", buffer.duration_secs());
    println!("Peak:        {:.1} dBFS", calculate_peak(&buffer));
    println!("RMS:         {:.1} dBFS", calculate_rms(&buffer));

    Ok(())
}

fn output_dir(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "segment".to_string())
}

fn print_written(paths: &[PathBuf]) {
    for path in paths {
        println!("Written: {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_test_tone;
    use tempfile::tempdir;

    fn write_tone(dir: &Path, secs: f64) -> PathBuf {
        let path = dir.join("tone.wav");
        export_audio(&generate_test_tone(440.0, secs, 8000), &path, ExportFormat::float())
            .unwrap();
        path
    }

    #[test]
    fn test_split_at_writes_segments() {
        let dir = tempdir().unwrap();
        let input = write_tone(dir.path(), 3.0);
        let out = dir.path().join("out");

        let paths = split_at(
            &input,
            &[2.0, 1.0],
            Some(&out),
            false,
            SplitConfig::default(),
            ExportFormat::float(),
        )
        .unwrap();

        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], out.join("tone_001.wav"));
        assert_eq!(import_audio(&paths[2]).unwrap().len(), 8000);
    }

    #[test]
    fn test_split_at_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = write_tone(dir.path(), 2.0);
        let out = dir.path().join("out");

        let paths = split_at(
            &input,
            &[1.0],
            Some(&out),
            true,
            SplitConfig::default(),
            ExportFormat::float(),
        )
        .unwrap();

        assert!(paths.is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn test_split_every_defaults_to_input_dir() {
        let dir = tempdir().unwrap();
        let input = write_tone(dir.path(), 2.5);

        let paths = split_every(&input, 1.0, None, SplitConfig::default(), ExportFormat::float())
            .unwrap();

        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.parent() == Some(dir.path())));
    }

    #[test]
    fn test_volume_writes_scaled_file() {
        let dir = tempdir().unwrap();
        let input = write_tone(dir.path(), 0.5);
        let output = dir.path().join("quiet.wav");

        volume(&input, 0.5, &output, ExportFormat::float()).unwrap();

        let original = import_audio(&input).unwrap();
        let quiet = import_audio(&output).unwrap();
        assert_eq!(quiet.channel(0)[10], original.channel(0)[10] * 0.5);
    }

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), SplitConfig::default());
    }
}
