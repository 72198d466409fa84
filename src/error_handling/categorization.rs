//! Error categorization.
//!
//! Maps resolution errors onto `FailureKind` so rejected URLs can be counted
//! and reported by category.

use super::types::{FailureKind, ResolveError};

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Redirects are disabled on the resolver's client, so the only distinctions
/// that matter are timeouts and connection failures (DNS, refused, TLS).
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_redirect() {
        FailureKind::TooManyRedirects
    } else {
        FailureKind::Request
    }
}

impl ResolveError {
    /// Returns the failure category of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::InvalidUrl { .. } => FailureKind::InvalidUrl,
            ResolveError::UnsafeTarget { .. } => FailureKind::UnsafeTarget,
            ResolveError::Request(e) => categorize_reqwest_error(e),
            ResolveError::MissingLocation { .. } => FailureKind::MissingLocation,
            ResolveError::InvalidLocation { .. } => FailureKind::InvalidLocation,
            ResolveError::TooManyRedirects { .. } => FailureKind::TooManyRedirects,
            ResolveError::Timeout { .. } => FailureKind::Timeout,
        }
    }
}
