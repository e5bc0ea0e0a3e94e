//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::MAX_REDIRECTS;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the header audit.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header
/// - Overall timeout, also used as the connect timeout
/// - Up to `MAX_REDIRECTS` redirects followed: the final response is audited
/// - Rustls TLS backend trusting the system store plus the bundled web PKI roots
///
/// # Arguments
///
/// * `timeout` - Upper bound for the whole request
/// * `user_agent` - User-Agent header value
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    timeout: Duration,
    user_agent: &str,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}
