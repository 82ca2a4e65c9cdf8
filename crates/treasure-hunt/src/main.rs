//! Command-line entry point for the treasure hunt simulation.
//!
//! Reads a treasure map, validates it, moves every explorer through its
//! program turn by turn, and writes the final state of the map.
//!
//! # Pipeline
//!
//! ```text
//! input file --> read --> parse --> validate --> simulate --> write --> output file
//! ```
//!
//! A map that fails validation is reported on stderr, one message per
//! line after `Something went wrong`, and no output file is written.

mod config;
mod error;
mod pipeline;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{HuntConfig, LoggingConfig};
use crate::error::HuntError;

/// Run a treasure hunt simulation.
#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate explorers hunting for treasure on a map", long_about = None)]
struct Args {
    /// Treasure map to read.
    input: PathBuf,

    /// File to write the final state to.
    output: PathBuf,

    /// Optional YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the input
/// cannot be read, or the output cannot be written.
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            args.config
                .as_deref()
                .map_or_else(|| "defaults".to_owned(), |p| p.display().to_string())
        )
    })?;

    init_logging(&config.logging);
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "treasure-hunt starting"
    );

    match pipeline::run(&args.input, &args.output, &config.output.headers()) {
        Ok(result) => {
            let collected: u64 = result
                .explorers
                .iter()
                .fold(0_u64, |acc, e| acc.saturating_add(u64::from(e.treasures)));
            info!(
                explorers = result.explorers.len(),
                collected,
                leftover_cells = result.leftover_treasures().count(),
                "Treasure hunt complete"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(HuntError::Validation { source }) => {
            eprintln!("{source}");
            for message in &source.errors {
                eprintln!("{message}");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(other) => Err(other).with_context(|| {
            format!(
                "Treasure hunt failed for {} -> {}",
                args.input.display(),
                args.output.display()
            )
        }),
    }
}

/// Initialize structured logging.
///
/// `RUST_LOG` wins when set; otherwise the configured level is used,
/// falling back to `info` if it is not a valid filter.
fn init_logging(logging: &LoggingConfig) {
    let directive = logging.filter_directive();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
        }))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if directive != logging.level.trim() {
        warn!(level = %logging.level, "Unrecognized log level, using info");
    }
}

/// Load the YAML configuration if a path was given, else the defaults.
fn load_config(path: Option<&Path>) -> Result<HuntConfig, HuntError> {
    let config = match path {
        Some(path) => HuntConfig::from_file(path)?,
        None => HuntConfig::parse("")?,
    };
    Ok(config)
}
