//! CLI Module
//!
//! Command-line interface for audiocut.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// audiocut - split WAV files at time points or into equal chunks
#[derive(Parser, Debug)]
#[command(name = "audiocut")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file overriding the split thresholds
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bit depth of written WAV files (16, 24 or 32)
    #[arg(long, global = true, default_value_t = 24)]
    pub bit_depth: u16,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a file at explicit time points
    #[command(name = "split-at")]
    SplitAt {
        /// Input WAV file
        input: PathBuf,

        /// Time point in seconds (repeatable or comma-separated)
        #[arg(long = "at", required = true, value_delimiter = ',', allow_negative_numbers = true)]
        at: Vec<f64>,

        /// Output directory (default: next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the planned segments without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Split a file into chunks of equal duration
    #[command(name = "split-every")]
    SplitEvery {
        /// Input WAV file
        input: PathBuf,

        /// Chunk duration in seconds
        #[arg(short, long)]
        seconds: f64,

        /// Output directory (default: next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scale the volume of a file
    #[command(name = "volume")]
    Volume {
        /// Input WAV file
        input: PathBuf,

        /// Linear ratio between 0 and 1
        #[arg(short, long)]
        ratio: f32,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print buffer properties and levels
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,
    },
}
