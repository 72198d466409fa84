//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{ResolverConfig, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes an HTTP client for redirect resolution.
///
/// Redirects are disabled so the resolver can validate and record every hop
/// itself. Each request is bounded by the resolver timeout, and connecting by
/// `TCP_CONNECT_TIMEOUT_SECS` (or the resolver timeout if shorter).
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &ResolverConfig) -> Result<reqwest::Client, reqwest::Error> {
    let connect_timeout = config
        .timeout
        .min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS));

    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()
}
