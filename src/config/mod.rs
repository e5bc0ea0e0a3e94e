//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeout, port, User-Agent, limits)
//! - The security header checklist
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{LogFormat, LogLevel, Opt, OutputFormat};
