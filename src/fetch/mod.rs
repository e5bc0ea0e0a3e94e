//! Security header audit.
//!
//! This module issues one HTTPS GET to the host's root, follows a bounded
//! number of redirects, and scores the final response against the security
//! header checklist. HTTP error statuses are scored like any other response.
//! Transport failures become an error result; nothing is raised.

mod request;

pub use request::check_security_headers;

use std::time::Duration;

use log::{debug, info, warn};

use crate::app::NormalizedHost;
use crate::config::{CHECK_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error_handling::{error_chain, HttpError};
use crate::initialization::init_client;
use crate::models::HeaderAuditResult;

/// Audits the security headers served at `https://<host>/`. Never fails.
///
/// The request uses a browser-like User-Agent and a `CHECK_TIMEOUT_SECS`
/// timeout. `score` is the number of checklist headers present; `total` is 5.
pub async fn audit_headers(host: &NormalizedHost) -> HeaderAuditResult {
    if host.is_empty() {
        let err = HttpError::EmptyHost;
        warn!("Header audit skipped: {err}");
        return HeaderAuditResult::failed(err.kind(), err.to_string());
    }
    audit_url(&request::audit_url(host), CHECK_TIMEOUT).await
}

pub(crate) async fn audit_url(url: &str, timeout: Duration) -> HeaderAuditResult {
    match fetch_audit(url, timeout).await {
        Ok(result) => {
            info!(
                "Header audit of {url}: status {}, score {}/{}",
                result.status_code.unwrap_or_default(),
                result.score,
                result.total
            );
            result
        }
        Err(e) => {
            let message = error_chain(&e);
            warn!("Header audit of {url} failed: {message}");
            HeaderAuditResult::failed(e.kind(), message)
        }
    }
}

async fn fetch_audit(url: &str, timeout: Duration) -> Result<HeaderAuditResult, HttpError> {
    let client = init_client(timeout, DEFAULT_USER_AGENT)?;

    debug!("Requesting {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HttpError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    log::trace!("Response version: {:?}", response.version());
    let items = check_security_headers(response.headers());
    for item in items.iter().filter(|item| !item.present) {
        debug!("{url} is missing {} ({})", item.name, item.description);
    }

    Ok(HeaderAuditResult::from_items(status.as_u16(), items))
}
