//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON lines for structured logging. Log output goes to
/// stderr so that it never mixes with the report on stdout.
///
/// When `RUST_LOG` is set its directives are used as given and `level` is
/// ignored. Otherwise `level` applies to this crate, with the HTTP and TLS
/// crates capped at `info`/`warn`.
///
/// # Arguments
///
/// * `level` - Minimum log level to display when `RUST_LOG` is unset
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # See every phase of both checks
/// siteguard example.com --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=siteguard=debug,rustls=debug siteguard example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let mut builder = logger_builder(level, format, env_filters.as_deref());

    // try_init() so a second initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn logger_builder(level: LevelFilter, format: LogFormat, env_filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    match env_filters {
        Some(filters) => {
            builder.parse_filters(filters);
        }
        None => {
            builder.filter_level(level);
            builder.filter_module("reqwest", LevelFilter::Info);
            builder.filter_module("hyper", LevelFilter::Info);
            builder.filter_module("hyper_util", LevelFilter::Info);
            builder.filter_module("rustls", LevelFilter::Warn);
            builder.filter_module("siteguard", level);
        }
    }
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_rust_log_directives_are_honored() {
        let logger = logger_builder(
            LevelFilter::Warn,
            LogFormat::Plain,
            Some("siteguard=debug,rustls=debug"),
        )
        .build();
        assert!(enabled(&logger, "siteguard::tls", Level::Debug));
        assert!(enabled(&logger, "rustls::client", Level::Debug));
        assert!(!enabled(&logger, "reqwest::connect", Level::Info));
    }

    #[test]
    fn test_level_applies_without_rust_log() {
        let logger = logger_builder(LevelFilter::Info, LogFormat::Json, None).build();
        assert!(enabled(&logger, "siteguard::fetch", Level::Info));
        assert!(!enabled(&logger, "siteguard::fetch", Level::Debug));
        assert!(!enabled(&logger, "rustls::client", Level::Info));
        assert!(enabled(&logger, "rustls::client", Level::Warn));
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        // Only one logger can be installed per process
        assert!(first.is_err() || second.is_err());
    }
}
