//! Error handling.
//!
//! This module provides:
//! - The failure taxonomy of the TLS inspection and the header audit
//! - Initialization errors of the ambient layer
//! - Categorization of transport errors into report categories
//!
//! Check failures are data, not faults: each check converts its error into a
//! category plus a detail string (see [`error_chain`]) and returns normally.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, error_chain};
pub use types::{HttpError, HttpFailureKind, InitializationError, TlsError, TlsFailureKind};
