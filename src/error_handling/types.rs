//! Error type definitions.
//!
//! This module defines the initialization and resolution errors, and the
//! categories used to count rejected URLs.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

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

/// Reasons a URL could not be resolved to a live destination.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The candidate could not be parsed as an absolute URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A hop pointed at a scheme or host the resolver refuses to contact.
    #[error("Refusing to fetch '{url}': {reason}")]
    UnsafeTarget { url: String, reason: String },

    /// The HTTP request itself failed (DNS, connect, TLS, body).
    #[error("Request failed: {0}")]
    Request(#[from] ReqwestError),

    /// A redirect status arrived without a `Location` header.
    #[error("Redirect status {status} from '{url}' without a Location header")]
    MissingLocation { url: String, status: u16 },

    /// The `Location` header could not be turned into a URL.
    #[error("Invalid redirect location '{location}' from '{url}'")]
    InvalidLocation { url: String, location: String },

    /// The redirect chain did not settle within the hop limit.
    #[error("Gave up on '{url}' after {max_hops} redirects")]
    TooManyRedirects { url: String, max_hops: usize },

    /// The whole resolution exceeded its time budget.
    #[error("Resolving '{url}' took longer than {}s", after.as_secs())]
    Timeout { url: String, after: Duration },
}

/// Categories of resolution failure, used for statistics and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    InvalidUrl,
    UnsafeTarget,
    Timeout,
    Connect,
    Request,
    MissingLocation,
    InvalidLocation,
    TooManyRedirects,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidUrl => "Invalid URL",
            FailureKind::UnsafeTarget => "Unsafe redirect target",
            FailureKind::Timeout => "Timeout",
            FailureKind::Connect => "Connection failed",
            FailureKind::Request => "Request failed",
            FailureKind::MissingLocation => "Redirect without Location",
            FailureKind::InvalidLocation => "Invalid redirect Location",
            FailureKind::TooManyRedirects => "Too many redirects",
        }
    }
}
