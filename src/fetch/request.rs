//! Request target construction and security header checks.

use reqwest::header::HeaderMap;

use crate::app::NormalizedHost;
use crate::config::{FORCED_SCHEME, MAX_HEADER_VALUE_LENGTH, SECURITY_HEADERS};
use crate::models::HeaderCheckItem;

/// Builds the audit URL for a host: always `https://<host>/`.
pub(crate) fn audit_url(host: &NormalizedHost) -> String {
    format!("{FORCED_SCHEME}://{host}/")
}

/// Checks a response's headers against the security header checklist.
///
/// Header names are matched case-insensitively. A header whose value is empty
/// or only whitespace counts as missing. Items come back in checklist order.
///
/// # Arguments
///
/// * `headers` - The HTTP response headers
pub fn check_security_headers(headers: &HeaderMap) -> Vec<HeaderCheckItem> {
    SECURITY_HEADERS
        .iter()
        .map(|&(name, description)| {
            let value = headers
                .get(name)
                .filter(|value| value.as_bytes().iter().any(|b| !b.is_ascii_whitespace()))
                .map(|value| {
                    String::from_utf8_lossy(value.as_bytes())
                        .chars()
                        .take(MAX_HEADER_VALUE_LENGTH)
                        .collect::<String>()
                });
            HeaderCheckItem {
                name: name.to_string(),
                description: description.to_string(),
                present: value.is_some(),
                value,
            }
        })
        .collect()
}
