//! Certificate extraction utilities.

use chrono::{DateTime, Utc};
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::{GeneralName, ParsedExtension};

use crate::config::SECONDS_PER_DAY;
use crate::error_handling::TlsError;
use crate::models::CertificateDetails;

/// Whole days from `now` until `not_after`, rounded toward negative infinity.
///
/// A certificate that expires in 12 hours has 0 days left; one that expired
/// 12 hours ago has -1.
pub fn days_remaining(not_after: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (not_after - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Decodes a DER leaf certificate into the details kept in a report.
///
/// # Arguments
///
/// * `der` - The DER-encoded leaf certificate
/// * `tls_version` - Negotiated protocol version, if known
/// * `cipher_suite` - Negotiated cipher suite, if known
///
/// # Errors
///
/// Returns `TlsError::CertificateParse` if the certificate cannot be decoded or
/// its validity timestamps are out of range.
pub(crate) fn certificate_details(
    der: &[u8],
    tls_version: Option<String>,
    cipher_suite: Option<String>,
) -> Result<CertificateDetails, TlsError> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| TlsError::CertificateParse(e.to_string()))?;
    details_from_parsed(&cert, tls_version, cipher_suite)
}

fn details_from_parsed(
    cert: &X509Certificate<'_>,
    tls_version: Option<String>,
    cipher_suite: Option<String>,
) -> Result<CertificateDetails, TlsError> {
    let tbs_cert = &cert.tbs_certificate;
    let not_before = to_utc(tbs_cert.validity.not_before.timestamp(), "not_before")?;
    let not_after = to_utc(tbs_cert.validity.not_after.timestamp(), "not_after")?;

    Ok(CertificateDetails {
        subject: tbs_cert.subject.to_string(),
        issuer: tbs_cert.issuer.to_string(),
        not_before,
        not_after,
        subject_alternative_names: extract_certificate_sans(cert),
        key_algorithm: key_algorithm_name(&tbs_cert.subject_pki.algorithm.algorithm.to_id_string()),
        tls_version,
        cipher_suite,
    })
}

fn to_utc(timestamp: i64, field: &str) -> Result<DateTime<Utc>, TlsError> {
    DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| TlsError::CertificateParse(format!("{field} out of range: {timestamp}")))
}

/// Maps a public key algorithm OID to its common name, or returns the OID.
fn key_algorithm_name(oid: &str) -> String {
    match oid {
        "1.2.840.113549.1.1.1" => "RSA".to_string(),
        "1.2.840.10045.2.1" => "ECDSA".to_string(),
        "1.3.101.112" => "Ed25519".to_string(),
        "1.3.101.113" => "Ed448".to_string(),
        other => other.to_string(),
    }
}

/// Extracts DNS names from the Subject Alternative Name extension.
///
/// Other name types (IP addresses, email addresses) are ignored.
fn extract_certificate_sans(cert: &X509Certificate<'_>) -> Vec<String> {
    let mut sans = Vec::new();

    for ext in cert.extensions() {
        if let ParsedExtension::SubjectAlternativeName(san) = ext.parsed_extension() {
            for general_name in &san.general_names {
                if let GeneralName::DNSName(dns_name) = general_name {
                    sans.push(dns_name.to_string());
                }
            }
        }
    }

    sans
}
