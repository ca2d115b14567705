//! Audio Engine Module
//!
//! Buffer type and file I/O shared by every splitter:
//! - Audio buffer management
//! - WAV import/export

pub mod buffer;
pub mod io;

pub use buffer::{calculate_peak, calculate_rms, AudioBuffer};
pub use io::{
    export_audio, export_segments, generate_stereo_test_tone, generate_test_tone, import_audio,
    ExportFormat,
};
