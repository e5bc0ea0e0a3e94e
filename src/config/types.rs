//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text blocks for the certificate, the header checklist and the final score
    Plain,
    /// The full report as a JSON document
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// siteguard example.com
///
/// # JSON report, fail the shell step below 6/10
/// siteguard https://example.com --output json --min-score 6
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "siteguard",
    about = "Checks a site's TLS certificate and security headers."
)]
pub struct Opt {
    /// Hostname or URL to assess (scheme optional)
    #[arg(value_parser)]
    pub target: String,

    /// Log level: error|warn|info|debug|trace (ignored when RUST_LOG is set)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Exit with status 1 when the final score (0-10) is below this value
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Disable colors in the plain report
    #[arg(long)]
    pub no_color: bool,
}

impl Opt {
    /// Rejects input the assessment should never be started with.
    ///
    /// An empty target is refused here so that the core never has to: `assess`
    /// itself runs on anything and reports failures as data.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is blank or `--min-score` is outside 0-10.
    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            bail!("target must not be empty");
        }
        if let Some(min) = self.min_score {
            if !(0.0..=10.0).contains(&min) {
                bail!("--min-score must be between 0 and 10, got {min}");
            }
        }
        Ok(())
    }
}
