//! Report rendering.
//!
//! Stateless consumers of a [`SecurityReport`]: a plain text layout for
//! terminals and a JSON document for machines.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::models::SecurityReport;

const RULE_WIDTH: usize = 40;

fn paint(text: &str, color: bool, style: fn(&str) -> colored::ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Renders the report as text blocks.
///
/// Layout: the certificate block, the header checklist (or the audit error),
/// then the `score/total` line with the score out of ten.
///
/// # Arguments
///
/// * `report` - The report to render
/// * `color` - Whether to use ANSI colors
pub fn render_plain(report: &SecurityReport, color: bool) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    let host = if report.host.is_empty() {
        "(no host)"
    } else {
        report.host.as_str()
    };
    lines.push(format!("Target: {host}"));
    lines.push(rule.clone());

    let cert = &report.certificate;
    let verdict = if cert.valid {
        paint("[OK]", color, |s| s.green().bold())
    } else {
        paint("[X]", color, |s| s.red().bold())
    };
    lines.push(format!("TLS CERTIFICATE: {verdict} {}", cert.detail));
    if let Some(details) = &cert.certificate {
        lines.push(format!("  Subject:  {}", details.subject));
        lines.push(format!("  Issuer:   {}", details.issuer));
        lines.push(format!("  Expires:  {}", details.not_after.format("%Y-%m-%d %H:%M:%S UTC")));
        if let Some(version) = &details.tls_version {
            lines.push(format!("  Protocol: {version}"));
        }
    }
    lines.push(rule.clone());
    lines.push(String::new());

    let headers = &report.headers;
    lines.push("SECURITY HEADERS:".to_string());
    match &headers.error_detail {
        Some(detail) => {
            lines.push(paint(&format!("Could not connect: {detail}"), color, |s| s.red()));
        }
        None => {
            if let Some(status) = headers.status_code {
                lines.push(format!("Server status: {status}"));
                lines.push(String::new());
            }
            lines.extend(headers.items.iter().map(|item| {
                if item.present {
                    format!("{} {}: present", paint("[OK]", color, |s| s.green()), item.name)
                } else {
                    format!(
                        "{}  {}: MISSING ({})",
                        paint("[X]", color, |s| s.red()),
                        item.name,
                        item.description
                    )
                }
            }));
        }
    }
    lines.push(String::new());
    lines.push(rule);
    lines.push(format!(
        "FINAL SCORE: {}/{} ({:.1}/10)",
        headers.score, headers.total, report.final_score_out_of_ten
    ));

    lines.join("\n")
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &SecurityReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}
