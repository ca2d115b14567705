//! audiocut CLI
//!
//! Command-line front end for splitting WAV files.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use audiocut::cli::{commands, Cli, Commands};
use audiocut::engine::ExportFormat;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("audiocut v{}", env!("CARGO_PKG_VERSION"));

    let config = commands::load_config(cli.config.as_deref()).context("loading split config")?;
    let format = ExportFormat::new(cli.bit_depth);

    match cli.command {
        Commands::SplitAt {
            input,
            at,
            output,
            dry_run,
        } => {
            commands::split_at(&input, &at, output.as_deref(), dry_run, config, format)
                .with_context(|| format!("splitting {}", input.display()))?;
        }
        Commands::SplitEvery {
            input,
            seconds,
            output,
        } => {
            commands::split_every(&input, seconds, output.as_deref(), config, format)
                .with_context(|| format!("splitting {}", input.display()))?;
        }
        Commands::Volume {
            input,
            ratio,
            output,
        } => {
            commands::volume(&input, ratio, &output, format)
                .with_context(|| format!("scaling {}", input.display()))?;
        }
        Commands::Info { input } => {
            commands::show_info(&input).with_context(|| format!("reading {}", input.display()))?;
        }
    }

    Ok(())
}
