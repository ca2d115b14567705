//! Error handling for audiocut
//!
//! Every failure is caused by caller input, so nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for audiocut operations
pub type Result<T> = std::result::Result<T, AudioCutError>;

/// Main error type for audiocut operations
#[derive(Error, Debug)]
pub enum AudioCutError {
    // Argument Errors
    #[error("AudioBuffer is required")]
    MissingBuffer,

    #[error("Time points must be finite numbers (got {value})")]
    InvalidInput { value: f64 },

    #[error("Time points must be positive (got {value}, audio duration {duration})")]
    NegativeTimePoint { value: f64, duration: f64 },

    #[error("Time point {value} exceeds audio duration {duration}")]
    TimePointExceedsDuration { value: f64, duration: f64 },

    #[error("Split time must be at least {min_secs} seconds (got {split_secs})")]
    InvalidInterval { split_secs: f64, min_secs: f64 },

    #[error("Split time {split_secs}s is greater than the audio duration {duration}s")]
    IntervalTooLarge { split_secs: f64, duration: f64 },

    #[error("Volume ratio must be between 0 and 1 (got {ratio})")]
    InvalidVolumeRatio { ratio: f32 },

    // Audio Errors
    #[error("Invalid audio: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Audio contains no samples")]
    EmptyAudio,

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AudioCutError {
    /// Get the error code for this error type
    ///
    /// Both time-point range violations share `OUT_OF_RANGE`.
    pub fn error_code(&self) -> &'static str {
        match self {
            AudioCutError::MissingBuffer => "MISSING_BUFFER",
            AudioCutError::InvalidInput { .. } => "INVALID_INPUT",
            AudioCutError::NegativeTimePoint { .. } => "OUT_OF_RANGE",
            AudioCutError::TimePointExceedsDuration { .. } => "OUT_OF_RANGE",
            AudioCutError::InvalidInterval { .. } => "INVALID_INTERVAL",
            AudioCutError::IntervalTooLarge { .. } => "INTERVAL_TOO_LARGE",
            AudioCutError::InvalidVolumeRatio { .. } => "INVALID_VOLUME_RATIO",
            AudioCutError::InvalidAudio { .. } => "INVALID_AUDIO",
            AudioCutError::EmptyAudio => "EMPTY_AUDIO",
            AudioCutError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            AudioCutError::FileNotFound { .. } => "FILE_NOT_FOUND",
            AudioCutError::InvalidConfig { .. } => "INVALID_CONFIG",
            AudioCutError::Io(_) => "IO_ERROR",
            AudioCutError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True for a time point outside `[0, duration]`
    pub fn is_out_of_range(&self) -> bool {
        self.error_code() == "OUT_OF_RANGE"
    }

    /// Shorthand for an `InvalidAudio` error with no underlying source
    pub(crate) fn invalid_audio(reason: impl Into<String>) -> Self {
        AudioCutError::InvalidAudio {
            reason: reason.into(),
            source: None,
        }
    }
}
