use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::io::ReportFormat;

/// What to do with lines that fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorMode {
    /// Skip and count them
    #[default]
    Silent,
    /// Skip and count them, logging each one
    Warn,
    /// Stop the run at the first one
    Abort,
}

/// Command-line and environment configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "brc")]
#[command(about = "Per-station temperature statistics over a `station;value` file", long_about = None)]
pub struct Config {
    /// Measurements file, or `-` to read standard input
    #[arg(value_name = "FILE", default_value = "data/measurements.txt")]
    pub input: PathBuf,

    /// Lines aggregated between yields to the runtime
    #[arg(long, env = "BRC_BATCH_SIZE", default_value = "1000000")]
    pub batch_size: NonZeroUsize,

    /// Batches aggregated in parallel
    #[arg(long, env = "BRC_WORKERS", default_value = "1")]
    pub workers: NonZeroUsize,

    /// Report format written to stdout
    #[arg(long, value_enum, env = "BRC_FORMAT", default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Handling of malformed lines
    #[arg(long, value_enum, env = "BRC_ON_ERROR", default_value_t = ErrorMode::Silent)]
    pub on_error: ErrorMode,

    /// Log filter directive, e.g. `info` or `brc=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Whether the input is standard input rather than a file
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }
}
