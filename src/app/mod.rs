//! Input handling.
//!
//! This module turns the single free-form input string into the host both
//! checks run against.

pub mod url;

// Re-export public API
pub use url::{normalize, NormalizedHost};
