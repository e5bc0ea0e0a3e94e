//! Report data model.
//!
//! Every value here is produced fresh by one assessment and handed to the
//! presentation layer; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::NormalizedHost;
use crate::config::SECURITY_HEADER_TOTAL;
use crate::error_handling::{HttpFailureKind, TlsFailureKind};

/// Details of the leaf certificate presented during a successful handshake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateDetails {
    pub subject: String,
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub subject_alternative_names: Vec<String>,
    pub key_algorithm: String,
    /// Negotiated protocol version (e.g. `TLSv1_3`)
    pub tls_version: Option<String>,
    pub cipher_suite: Option<String>,
}

/// Outcome of the TLS inspection.
///
/// `valid == false` implies `days_remaining`, `certificate` are `None` and
/// `failure` is set. `detail` always carries either the expiry summary or the
/// failure cause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateStatus {
    pub valid: bool,
    pub days_remaining: Option<i64>,
    pub detail: String,
    pub failure: Option<TlsFailureKind>,
    pub certificate: Option<CertificateDetails>,
}

impl CertificateStatus {
    /// Status for a completed handshake.
    ///
    /// The handshake is the validity verdict: a negative day count is still
    /// reported as valid.
    pub fn valid(days_remaining: i64, certificate: CertificateDetails) -> Self {
        Self {
            valid: true,
            days_remaining: Some(days_remaining),
            detail: format!("Valid (expires in {days_remaining} days)"),
            failure: None,
            certificate: Some(certificate),
        }
    }

    /// Status for a failed inspection.
    pub fn failed(kind: TlsFailureKind, message: impl AsRef<str>) -> Self {
        Self {
            valid: false,
            days_remaining: None,
            detail: format!("{kind}: {}", message.as_ref()),
            failure: Some(kind),
            certificate: None,
        }
    }
}

/// One entry of the security header checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCheckItem {
    pub name: String,
    pub description: String,
    pub present: bool,
    /// Header value when present
    pub value: Option<String>,
}

/// Outcome of the header audit.
///
/// `score` is always the number of present items. When `error_detail` is set
/// the audit never saw a response: `items` is empty, `score` is 0 and
/// `status_code` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderAuditResult {
    pub status_code: Option<u16>,
    pub items: Vec<HeaderCheckItem>,
    pub score: u32,
    pub total: u32,
    pub error_detail: Option<String>,
    pub error_kind: Option<HttpFailureKind>,
}

impl HeaderAuditResult {
    /// Result for a response that was received and checked.
    pub fn from_items(status_code: u16, items: Vec<HeaderCheckItem>) -> Self {
        let score = items.iter().filter(|item| item.present).count() as u32;
        Self {
            status_code: Some(status_code),
            items,
            score,
            total: SECURITY_HEADER_TOTAL,
            error_detail: None,
            error_kind: None,
        }
    }

    /// Result for a request that produced no response.
    pub fn failed(kind: HttpFailureKind, message: impl AsRef<str>) -> Self {
        Self {
            status_code: None,
            items: Vec::new(),
            score: 0,
            total: SECURITY_HEADER_TOTAL,
            error_detail: Some(format!("{kind}: {}", message.as_ref())),
            error_kind: Some(kind),
        }
    }

    /// Header score scaled to 0-10.
    pub fn score_out_of_ten(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total) * 10.0
    }
}

/// Terminal artifact of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityReport {
    pub host: NormalizedHost,
    pub certificate: CertificateStatus,
    pub headers: HeaderAuditResult,
    pub final_score_out_of_ten: f64,
}

impl SecurityReport {
    /// Merges both check results; the final score comes from the header audit.
    pub fn new(host: NormalizedHost, certificate: CertificateStatus, headers: HeaderAuditResult) -> Self {
        let final_score_out_of_ten = headers.score_out_of_ten();
        Self {
            host,
            certificate,
            headers,
            final_score_out_of_ten,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, present: bool) -> HeaderCheckItem {
        HeaderCheckItem {
            name: name.to_string(),
            description: String::new(),
            present,
            value: present.then(|| "x".to_string()),
        }
    }

    #[test]
    fn test_failed_certificate_has_no_days() {
        let status = CertificateStatus::failed(TlsFailureKind::Connect, "refused");
        assert!(!status.valid);
        assert!(status.days_remaining.is_none());
        assert!(status.certificate.is_none());
        assert_eq!(status.detail, "Connection failed: refused");
    }

    #[test]
    fn test_score_counts_present_items() {
        let result = HeaderAuditResult::from_items(
            200,
            vec![
                item("a", true),
                item("b", false),
                item("c", true),
                item("d", true),
                item("e", false),
            ],
        );
        assert_eq!(result.score, 3);
        assert_eq!(result.total, 5);
        assert_eq!(result.score_out_of_ten(), 6.0);
    }

    #[test]
    fn test_failed_audit_invariants() {
        let result = HeaderAuditResult::failed(HttpFailureKind::Timeout, "slow");
        assert!(result.items.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.total, 5);
        assert!(result.status_code.is_none());
        assert_eq!(result.error_kind, Some(HttpFailureKind::Timeout));
        assert_eq!(result.score_out_of_ten(), 0.0);
    }

    #[test]
    fn test_report_takes_final_score_from_headers() {
        let headers = HeaderAuditResult::from_items(
            200,
            (0..5).map(|i| item(&i.to_string(), true)).collect(),
        );
        let report = SecurityReport::new(
            NormalizedHost::empty(),
            CertificateStatus::failed(TlsFailureKind::InvalidHost, "no host to inspect"),
            headers,
        );
        assert_eq!(report.final_score_out_of_ten, 10.0);
    }
}
