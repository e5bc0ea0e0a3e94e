//! siteguard library: website security assessment.
//!
//! Given a hostname or URL, this library checks two things:
//! - the TLS certificate presented on port 443 (validity, days to expiry)
//! - the security headers returned by `https://<host>/`, scored out of 5
//!
//! Both checks absorb their own failures, so an assessment always produces a
//! complete [`SecurityReport`].
//!
//! # Example
//!
//! ```no_run
//! use siteguard::assess;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let report = assess("example.com").await;
//! println!(
//!     "{}: certificate valid = {}, headers {}/{}",
//!     report.host, report.certificate.valid, report.headers.score, report.headers.total
//! );
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod output;
pub mod tls;

// Re-export public API
pub use app::{normalize, NormalizedHost};
pub use assess::assess;
pub use fetch::audit_headers;
pub use models::{
    CertificateDetails, CertificateStatus, HeaderAuditResult, HeaderCheckItem, SecurityReport,
};
pub use tls::inspect_tls;

// Orchestration of the two checks
mod assess {
    use log::info;

    use crate::app::normalize;
    use crate::fetch::audit_headers;
    use crate::models::SecurityReport;
    use crate::tls::inspect_tls;

    /// Assesses a site and returns the merged report. Never fails.
    ///
    /// Normalizes the input once, then runs the TLS inspection and the header
    /// audit concurrently. Neither check observes the other's outcome, so a
    /// failure in one leaves the other untouched. An empty or unparseable
    /// input still runs both checks, which then report an invalid host.
    ///
    /// Each check is bounded by `CHECK_TIMEOUT_SECS`, so the whole call takes
    /// roughly that long in the worst case.
    ///
    /// # Arguments
    ///
    /// * `raw` - Hostname or URL, with or without a scheme
    pub async fn assess(raw: &str) -> SecurityReport {
        let host = normalize(raw);
        info!("Assessing '{host}'");

        let (certificate, headers) = tokio::join!(inspect_tls(&host), audit_headers(&host));

        let report = SecurityReport::new(host, certificate, headers);
        info!(
            "Assessment of '{}' finished: certificate valid = {}, headers {}/{} ({:.1}/10)",
            report.host,
            report.certificate.valid,
            report.headers.score,
            report.headers.total,
            report.final_score_out_of_ten
        );
        report
    }

}
