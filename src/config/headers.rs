//! Security header checklist.
//!
//! The checklist is configuration, not something discovered at runtime. Order
//! matters: reports list the items exactly in this order.

/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";

/// Security headers checked by the audit, each paired with what it protects against.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    (HEADER_X_FRAME_OPTIONS, "Clickjacking protection"),
    (HEADER_X_CONTENT_TYPE_OPTIONS, "MIME-sniffing protection"),
    (HEADER_STRICT_TRANSPORT_SECURITY, "Forced HTTPS (HSTS)"),
    (HEADER_CONTENT_SECURITY_POLICY, "XSS protection"),
    (HEADER_REFERRER_POLICY, "Referrer privacy"),
];

/// Number of checklist items; the denominator of every header score.
pub const SECURITY_HEADER_TOTAL: u32 = SECURITY_HEADERS.len() as u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_order() {
        let names: Vec<&str> = SECURITY_HEADERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "X-Frame-Options",
                "X-Content-Type-Options",
                "Strict-Transport-Security",
                "Content-Security-Policy",
                "Referrer-Policy",
            ]
        );
    }

    #[test]
    fn test_checklist_total_is_five() {
        assert_eq!(SECURITY_HEADER_TOTAL, 5);
    }

    #[test]
    fn test_every_header_has_description() {
        for (name, description) in SECURITY_HEADERS {
            assert!(!description.is_empty(), "{name} should have a description");
        }
    }

    #[test]
    fn test_header_names_are_valid() {
        for (name, _) in SECURITY_HEADERS {
            assert!(
                reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_ok(),
                "{name} should be a valid header name"
            );
        }
    }
}
