//! Configuration constants.
//!
//! These values are fixed at compile time. The assessment deliberately has no
//! runtime knobs for its network behavior: every run uses the same timeout,
//! port, scheme and User-Agent.

use std::time::Duration;

/// Timeout in seconds applied to each check (TLS inspection, header request).
pub const CHECK_TIMEOUT_SECS: u64 = 5;

/// [`CHECK_TIMEOUT_SECS`] as a `Duration`.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(CHECK_TIMEOUT_SECS);

/// Port used for the TLS certificate inspection.
pub const HTTPS_PORT: u16 = 443;

/// Scheme forced on the header audit request, regardless of the input's scheme.
pub const FORCED_SCHEME: &str = "https";

/// User-Agent sent with the header audit request.
///
/// A browser-like string keeps trivial bot filters from answering with a
/// challenge page instead of the site's real response headers.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Redirect hops followed by the header audit before giving up.
pub const MAX_REDIRECTS: usize = 5;

/// Maximum input length (2048 characters), matching common browser and server URL limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum header value length kept in a report (1000 chars).
/// Longer values are truncated.
pub const MAX_HEADER_VALUE_LENGTH: usize = 1000;

/// Seconds in one day, used for the days-to-expiry computation.
pub const SECONDS_PER_DAY: i64 = 86_400;
