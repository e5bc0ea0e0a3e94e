//! Tests that `assess` returns a well-formed report for any input.
//!
//! None of these inputs can produce a reachable site, so every report carries
//! failure details instead of results. Inputs that need name resolution fail
//! either at DNS or at the timeout, depending on the environment.

use std::time::{Duration, Instant};

use siteguard::{assess, SecurityReport};

fn assert_well_formed(report: &SecurityReport) {
    assert!(!report.certificate.detail.is_empty());
    if !report.certificate.valid {
        assert!(report.certificate.days_remaining.is_none());
        assert!(report.certificate.failure.is_some());
    }

    let headers = &report.headers;
    assert_eq!(headers.total, 5);
    assert_eq!(
        headers.score as usize,
        headers.items.iter().filter(|item| item.present).count()
    );
    if headers.error_detail.is_some() {
        assert!(headers.items.is_empty());
        assert_eq!(headers.score, 0);
        assert!(headers.status_code.is_none());
        assert!(headers.error_kind.is_some());
    }
    assert_eq!(
        report.final_score_out_of_ten,
        f64::from(headers.score) / f64::from(headers.total) * 10.0
    );
}

#[tokio::test]
async fn test_assess_empty_string() {
    let report = assess("").await;
    assert!(report.host.is_empty());
    assert!(!report.certificate.valid);
    assert!(report.headers.error_detail.is_some());
    assert_well_formed(&report);
}

#[tokio::test]
async fn test_assess_garbage_input() {
    for input in ["   ", "http://", "::::", "https://exa mple.com", "\u{0}\u{1}"] {
        let report = assess(input).await;
        assert!(!report.certificate.valid, "input {input:?}");
        assert_well_formed(&report);
    }
}

#[tokio::test]
async fn test_assess_unresolvable_host() {
    // .invalid is reserved and never resolves
    let start = Instant::now();
    let report = assess("no-such-host.invalid").await;

    assert_eq!(report.host.as_str(), "no-such-host.invalid");
    assert!(!report.certificate.valid);
    assert!(report.headers.error_detail.is_some());
    assert_well_formed(&report);
    // Checks run concurrently, each bounded by 5 seconds
    assert!(start.elapsed() < Duration::from_secs(8));
}

#[tokio::test]
async fn test_assess_refused_port() {
    // Loopback normally has nothing on 443; both checks must fail cleanly
    let report = assess("127.0.0.1").await;
    assert_well_formed(&report);
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_assess_real_site() {
    let report = assess("http://example.com/some/path").await;
    assert_eq!(report.host.as_str(), "example.com");
    assert!(report.certificate.valid, "{}", report.certificate.detail);
    assert!(report.headers.status_code.is_some());
    assert_well_formed(&report);
}
