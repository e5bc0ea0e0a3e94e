//! TLS certificate inspection.
//!
//! This module connects to a host on the HTTPS port, completes a TLS handshake
//! against the system trust store and reports how many days the
//! peer's leaf certificate has left. It also keeps the certificate details
//! (subject, issuer, validity, SANs, key algorithm, negotiated version and
//! cipher suite).
//!
//! Uses `tokio-rustls` for the connection and `x509-parser` for the certificate.

mod extract;

pub use extract::days_remaining;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use rustls::pki_types::ServerName;
use tokio::net::{lookup_host, TcpStream};
use tokio::time::{timeout_at, Instant};
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::app::NormalizedHost;
use crate::config::{CHECK_TIMEOUT, HTTPS_PORT};
use crate::error_handling::{error_chain, TlsError};
use crate::models::{CertificateDetails, CertificateStatus};

/// Inspects the TLS certificate of `host` on port 443. Never fails.
///
/// Resolution, connect and handshake share one deadline of
/// `CHECK_TIMEOUT_SECS`. Any failure is returned as an invalid
/// `CertificateStatus` whose detail names the failure category.
///
/// A completed handshake is reported as valid even if the computed day count
/// is negative.
pub async fn inspect_tls(host: &NormalizedHost) -> CertificateStatus {
    if host.is_empty() {
        let err = TlsError::EmptyHost;
        warn!("TLS inspection skipped: {err}");
        return CertificateStatus::failed(err.kind(), err.to_string());
    }
    inspect_tls_on(host.hostname(), HTTPS_PORT, CHECK_TIMEOUT, system_roots()).await
}

pub(crate) async fn inspect_tls_on(
    hostname: &str,
    port: u16,
    timeout: Duration,
    roots: RootCertStore,
) -> CertificateStatus {
    match fetch_leaf_certificate(hostname, port, timeout, roots).await {
        Ok(details) => {
            let days = days_remaining(details.not_after, Utc::now());
            if days < 0 {
                warn!(
                    "Handshake with {hostname} succeeded but the certificate expired {} days ago",
                    -days
                );
            }
            info!("Certificate for {hostname} expires in {days} days");
            CertificateStatus::valid(days, details)
        }
        Err(e) => {
            let message = error_chain(&e);
            warn!("TLS inspection of {hostname}:{port} failed: {message}");
            CertificateStatus::failed(e.kind(), message)
        }
    }
}

/// Loads the operating system's trust anchors.
///
/// Falls back to the bundled Mozilla roots when the platform store yields
/// nothing usable (minimal containers often ship without one).
fn system_roots() -> RootCertStore {
    let native = rustls_native_certs::load_native_certs();
    for err in &native.errors {
        debug!("Skipping part of the system trust store: {err}");
    }

    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(native.certs);
    if ignored > 0 {
        debug!("Ignored {ignored} unparsable system certificates");
    }
    if added == 0 {
        warn!("System trust store is empty; using bundled web PKI roots");
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    }
    roots
}

fn client_config(roots: RootCertStore) -> ClientConfig {
    ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth()
}

fn timeout_error(phase: &'static str, host: &str, timeout: Duration) -> TlsError {
    TlsError::Timeout {
        phase,
        host: host.to_string(),
        timeout,
    }
}

/// Connects, handshakes and decodes the peer's leaf certificate.
///
/// The TCP socket and the TLS session are owned by this function and closed
/// when it returns, on every path.
async fn fetch_leaf_certificate(
    hostname: &str,
    port: u16,
    timeout: Duration,
    roots: RootCertStore,
) -> Result<CertificateDetails, TlsError> {
    if hostname.is_empty() {
        return Err(TlsError::EmptyHost);
    }
    crate::initialization::init_crypto_provider();

    // IPv6 literals arrive bracketed from the normalizer
    let bare_host = hostname.trim_start_matches('[').trim_end_matches(']');
    let server_name = ServerName::try_from(bare_host.to_string())
        .map_err(|_| TlsError::InvalidServerName(hostname.to_string()))?;

    let deadline = Instant::now() + timeout;

    debug!("Resolving {hostname}");
    let addrs: Vec<SocketAddr> = match timeout_at(deadline, lookup_host((bare_host, port))).await {
        Ok(Ok(addrs)) => addrs.collect(),
        Ok(Err(source)) => {
            return Err(TlsError::Dns {
                host: hostname.to_string(),
                source,
            })
        }
        Err(_) => return Err(timeout_error("DNS resolution", hostname, timeout)),
    };
    if addrs.is_empty() {
        return Err(TlsError::NoAddresses(hostname.to_string()));
    }

    let sock = connect_any(hostname, &addrs, deadline, timeout).await?;

    debug!("Starting TLS handshake with {hostname}");
    let connector = TlsConnector::from(Arc::new(client_config(roots)));
    let tls_stream = match timeout_at(deadline, connector.connect(server_name, sock)).await {
        Ok(Ok(stream)) => stream,
        Ok(Err(source)) => {
            return Err(TlsError::Handshake {
                host: hostname.to_string(),
                source,
            })
        }
        Err(_) => return Err(timeout_error("TLS handshake", hostname, timeout)),
    };

    let (_, connection) = tls_stream.get_ref();
    let tls_version = connection.protocol_version().map(|v| format!("{v:?}"));
    let cipher_suite = connection
        .negotiated_cipher_suite()
        .map(|cs| format!("{:?}", cs.suite()));

    let leaf = connection
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| TlsError::NoCertificate(hostname.to_string()))?;

    extract::certificate_details(leaf.as_ref(), tls_version, cipher_suite)
}

/// Tries each resolved address in order until one accepts or the deadline passes.
async fn connect_any(
    hostname: &str,
    addrs: &[SocketAddr],
    deadline: Instant,
    timeout: Duration,
) -> Result<TcpStream, TlsError> {
    let mut last_error = None;
    for addr in addrs {
        debug!("Connecting to {addr} for {hostname}");
        match timeout_at(deadline, TcpStream::connect(*addr)).await {
            Ok(Ok(sock)) => return Ok(sock),
            Ok(Err(source)) => {
                debug!("Connection to {addr} failed: {source}");
                last_error = Some(TlsError::Connect {
                    addr: *addr,
                    source,
                });
            }
            Err(_) => return Err(timeout_error("TCP connect", hostname, timeout)),
        }
    }
    Err(last_error.unwrap_or_else(|| TlsError::NoAddresses(hostname.to_string())))
}
