//! Error categorization.
//!
//! Maps transport errors onto the failure categories used in reports.

use super::types::HttpFailureKind;

/// Categorizes a `reqwest::Error` into an `HttpFailureKind`.
///
/// Timeouts are checked before connect errors: a connect timeout satisfies
/// both predicates and is reported as a timeout.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `HttpFailureKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> HttpFailureKind {
    if error.is_builder() {
        HttpFailureKind::Builder
    } else if error.is_redirect() {
        HttpFailureKind::Redirect
    } else if error.is_timeout() {
        HttpFailureKind::Timeout
    } else if error.is_connect() {
        HttpFailureKind::Connect
    } else if error.is_body() {
        HttpFailureKind::Body
    } else if error.is_decode() {
        HttpFailureKind::Decode
    } else if error.is_request() {
        HttpFailureKind::Request
    } else {
        HttpFailureKind::Other
    }
}

/// Formats an error together with its whole `source()` chain.
///
/// Transport errors usually hide the useful part ("Connection refused",
/// "certificate expired") a few levels down the chain.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(error_chain(&err), "outer: Connection refused");
    }

    #[test]
    fn test_error_chain_without_source() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "plain");
        assert_eq!(error_chain(&err), "plain");
    }

    #[tokio::test]
    async fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let err = client
            .get("not a url")
            .send()
            .await
            .expect_err("invalid URL should fail");
        assert_eq!(categorize_reqwest_error(&err), HttpFailureKind::Builder);
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Bind then drop to get a local port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let err = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect_err("closed port should refuse");
        assert_eq!(categorize_reqwest_error(&err), HttpFailureKind::Connect);
    }
}
