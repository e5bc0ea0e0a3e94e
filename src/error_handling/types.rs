//! Error type definitions.
//!
//! This module defines the failure taxonomy of both checks plus the errors of
//! the ambient initialization layer. Check failures never leave their check:
//! they are converted into report fields carrying a [`TlsFailureKind`] or an
//! [`HttpFailureKind`] and a readable detail message.

use std::net::SocketAddr;
use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of TLS inspection failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsFailureKind {
    /// No usable host (empty or not a valid server name)
    InvalidHost,
    /// Host name could not be resolved
    Dns,
    /// TCP connection refused or unreachable
    Connect,
    /// A phase did not finish within the check timeout
    Timeout,
    /// TLS negotiation or certificate verification failed
    Handshake,
    /// Handshake succeeded but no peer certificate was presented
    NoCertificate,
    /// Leaf certificate could not be decoded
    CertificateParse,
}

impl TlsFailureKind {
    /// Returns a human-readable label for the failure category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TlsFailureKind::InvalidHost => "Invalid host",
            TlsFailureKind::Dns => "DNS resolution failed",
            TlsFailureKind::Connect => "Connection failed",
            TlsFailureKind::Timeout => "Timed out",
            TlsFailureKind::Handshake => "TLS handshake failed",
            TlsFailureKind::NoCertificate => "No certificate presented",
            TlsFailureKind::CertificateParse => "Certificate parse error",
        }
    }
}

impl std::fmt::Display for TlsFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories of header audit failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpFailureKind {
    /// No usable host to build a request URL from
    InvalidHost,
    /// Client or request could not be built
    Builder,
    /// Request did not complete within the check timeout
    Timeout,
    /// Connection (TCP or TLS) could not be established
    Connect,
    /// Request could not be sent
    Request,
    /// Response body error
    Body,
    /// Response could not be decoded
    Decode,
    /// Redirect policy error
    Redirect,
    /// Anything else reported by the transport
    Other,
}

impl HttpFailureKind {
    /// Returns a human-readable label for the failure category.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpFailureKind::InvalidHost => "Invalid host",
            HttpFailureKind::Builder => "HTTP request builder error",
            HttpFailureKind::Timeout => "HTTP request timeout",
            HttpFailureKind::Connect => "HTTP connect error",
            HttpFailureKind::Request => "HTTP request error",
            HttpFailureKind::Body => "HTTP body error",
            HttpFailureKind::Decode => "HTTP decode error",
            HttpFailureKind::Redirect => "HTTP redirect error",
            HttpFailureKind::Other => "HTTP error",
        }
    }
}

impl std::fmt::Display for HttpFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of the TLS inspection.
#[derive(Error, Debug)]
pub enum TlsError {
    /// Nothing to connect to.
    #[error("no host to inspect")]
    EmptyHost,

    /// Host is not usable as a TLS server name.
    #[error("invalid server name '{0}'")]
    InvalidServerName(String),

    /// Name resolution failed.
    #[error("could not resolve {host}")]
    Dns {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// Name resolution returned nothing.
    #[error("no addresses found for {0}")]
    NoAddresses(String),

    /// TCP connect failed.
    #[error("connection to {addr} failed")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// A phase ran past the deadline.
    #[error("{phase} for {host} timed out after {timeout:?}")]
    Timeout {
        phase: &'static str,
        host: String,
        timeout: Duration,
    },

    /// TLS negotiation failed (including certificate verification).
    #[error("TLS handshake with {host} failed")]
    Handshake {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// The peer sent no certificate.
    #[error("{0} presented no certificate")]
    NoCertificate(String),

    /// The leaf certificate could not be decoded.
    #[error("certificate could not be parsed: {0}")]
    CertificateParse(String),
}

impl TlsError {
    /// Returns the failure category.
    pub fn kind(&self) -> TlsFailureKind {
        match self {
            TlsError::EmptyHost | TlsError::InvalidServerName(_) => TlsFailureKind::InvalidHost,
            TlsError::Dns { .. } | TlsError::NoAddresses(_) => TlsFailureKind::Dns,
            TlsError::Connect { .. } => TlsFailureKind::Connect,
            TlsError::Timeout { .. } => TlsFailureKind::Timeout,
            TlsError::Handshake { .. } => TlsFailureKind::Handshake,
            TlsError::NoCertificate(_) => TlsFailureKind::NoCertificate,
            TlsError::CertificateParse(_) => TlsFailureKind::CertificateParse,
        }
    }
}

/// Failures of the header audit request.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Nothing to request.
    #[error("no host to request")]
    EmptyHost,

    /// HTTP client could not be created.
    #[error(transparent)]
    Client(#[from] InitializationError),

    /// The request itself failed.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

impl HttpError {
    /// Returns the failure category.
    pub fn kind(&self) -> HttpFailureKind {
        match self {
            HttpError::EmptyHost => HttpFailureKind::InvalidHost,
            HttpError::Client(_) => HttpFailureKind::Builder,
            HttpError::Request { source, .. } => categorize_reqwest_error(source),
        }
    }
}
