//! Live resolution of URLs to their final destination.
//!
//! A [`Resolver`] issues real GET requests and follows protocol-level
//! redirects by hand, bounded by a hop cap and an overall timeout. Meta and
//! JavaScript redirects are not followed.

mod redirects;
mod safety;

use log::{debug, warn};
use reqwest::Url;

use crate::app::ensure_scheme;
use crate::config::ResolverConfig;
use crate::error_handling::{InitializationError, ResolveError};
use crate::initialization::init_redirect_client;

pub use safety::validate_url_safe;

/// Where a URL ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// URL of the first non-redirect response
    pub final_url: String,
    /// Every URL requested, in order, starting with the input
    pub chain: Vec<String>,
    /// Status of the final response
    pub status: u16,
}

impl Resolution {
    /// Number of redirects followed.
    pub fn hops(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }
}

/// Resolves URLs over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Resolver {
    client: reqwest::Client,
    config: ResolverConfig,
}

impl Resolver {
    /// Builds a resolver with its own redirect-less client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: ResolverConfig) -> Result<Self, InitializationError> {
        let client = init_redirect_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Follows `url` to its live destination.
    ///
    /// A missing scheme defaults to `https`. The whole chain, every hop
    /// included, must finish within `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns a `ResolveError` describing why no live destination was reached.
    pub async fn resolve(&self, url: &str) -> Result<Resolution, ResolveError> {
        let url = ensure_scheme(url);
        let start = Url::parse(&url).map_err(|source| ResolveError::InvalidUrl {
            url: url.clone(),
            source,
        })?;

        let resolution = tokio::time::timeout(
            self.config.timeout,
            redirects::follow_redirects(start, &self.client, &self.config),
        )
        .await
        .map_err(|_| ResolveError::Timeout {
            url: url.clone(),
            after: self.config.timeout,
        })??;

        debug!(
            "Resolved {} to {} in {} hop(s)",
            url,
            resolution.final_url,
            resolution.hops()
        );
        Ok(resolution)
    }

    /// Returns the final live URL, or `None` if `url` could not be resolved.
    pub async fn is_valid(&self, url: &str) -> Option<String> {
        match self.resolve(url).await {
            Ok(resolution) => Some(resolution.final_url),
            Err(e) => {
                warn!("{} is not reachable: {}", url, e);
                None
            }
        }
    }
}

/// Returns the final live URL of `url`, or `None` if it cannot be reached.
///
/// Builds a default [`Resolver`] for the call. Use one `Resolver` directly to
/// reuse its connection pool across many URLs.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let live = neutralise_link::is_valid("http://github.com").await;
/// assert_eq!(live.as_deref(), Some("https://github.com/"));
/// # }
/// ```
pub async fn is_valid(url: &str) -> Option<String> {
    match Resolver::new(ResolverConfig::default()) {
        Ok(resolver) => resolver.is_valid(url).await,
        Err(e) => {
            warn!("Could not build a resolver: {}", e);
            None
        }
    }
}
