//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared pieces of the
//! ambient layer:
//! - Logger (plain or JSON)
//! - Crypto provider for `rustls`
//! - HTTP client used by the header audit

mod client;
mod logger;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. Must run before any TLS
/// connection is established; the TLS inspector calls it itself so that
/// library users do not have to.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
