//! The neutralisation pipeline.
//!
//! A URL is given a scheme, stripped of referrer and tracking parameters,
//! compacted, screened, and only then resolved. A URL the classifier rejects
//! never reaches the network.

use log::{info, warn};

use crate::app::ensure_scheme;
use crate::compact::compactify;
use crate::config::ResolverConfig;
use crate::error_handling::{FailureKind, InitializationError};
use crate::malice::{classify, MaliceReason, Verdict};
use crate::params::{rem_refs, rem_trackers};
use crate::resolve::Resolver;

/// What became of one input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Cleaned, screened and (unless offline) resolved to this URL
    Neutralised(String),
    /// Rejected by the classifier before any request
    Malicious(MaliceReason),
    /// Clean, but no live destination was reached
    Unreachable(FailureKind),
}

impl Outcome {
    pub fn url(&self) -> Option<&str> {
        match self {
            Outcome::Neutralised(url) => Some(url),
            _ => None,
        }
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            Outcome::Neutralised(url) => Some(url),
            _ => None,
        }
    }

    pub fn is_neutralised(&self) -> bool {
        matches!(self, Outcome::Neutralised(_))
    }
}

/// Default scheme, parameter filtering and compaction, without screening or
/// network access.
///
/// # Examples
///
/// ```
/// use neutralise_link::clean;
///
/// assert_eq!(
///     clean("www.example.com:443/a/?utm_source=x&id=7&ved=abc"),
///     "https://example.com/a?id=7"
/// );
/// ```
pub fn clean(url: &str) -> String {
    compactify(&rem_trackers(&rem_refs(&ensure_scheme(url))))
}

/// Runs the full pipeline over many URLs with one shared [`Resolver`].
#[derive(Debug, Clone)]
pub struct Neutraliser {
    resolver: Resolver,
}

impl Neutraliser {
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: ResolverConfig) -> Result<Self, InitializationError> {
        Ok(Self {
            resolver: Resolver::new(config)?,
        })
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Cleans, screens and resolves `url`.
    pub async fn process(&self, url: &str) -> Outcome {
        let cleaned = match screen(url) {
            Ok(cleaned) => cleaned,
            Err(reason) => return Outcome::Malicious(reason),
        };

        match self.resolver.resolve(&cleaned).await {
            Ok(resolution) => Outcome::Neutralised(resolution.final_url),
            Err(e) => {
                warn!("{} is not reachable: {}", cleaned, e);
                Outcome::Unreachable(e.kind())
            }
        }
    }

    /// Cleans and screens `url` without resolving it.
    pub fn process_offline(url: &str) -> Outcome {
        match screen(url) {
            Ok(cleaned) => Outcome::Neutralised(cleaned),
            Err(reason) => Outcome::Malicious(reason),
        }
    }

    /// Returns the neutralised URL, or `None` if it is malicious or unreachable.
    pub async fn neutralise(&self, url: &str) -> Option<String> {
        self.process(url).await.into_url()
    }
}

fn screen(url: &str) -> Result<String, MaliceReason> {
    let cleaned = clean(url);
    match classify(&cleaned) {
        Verdict::Clean => Ok(cleaned),
        Verdict::Malicious(reason) => {
            info!("Rejected {}: {}", cleaned, reason);
            Err(reason)
        }
    }
}

/// Neutralises one URL: strips referrer and tracking parameters, compacts it,
/// rejects it if malicious, then resolves it to its live destination.
///
/// Returns `None` if the URL is malicious or cannot be reached. Builds a
/// default [`Neutraliser`] for the call.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let url = neutralise_link::neutralise("http://github.com/?utm_source=x").await;
/// assert_eq!(url.as_deref(), Some("https://github.com/"));
///
/// assert_eq!(neutralise_link::neutralise("https://example.com/?backfill=1").await, None);
/// # }
/// ```
pub async fn neutralise(url: &str) -> Option<String> {
    match Neutraliser::new(ResolverConfig::default()) {
        Ok(neutraliser) => neutraliser.neutralise(url).await,
        Err(e) => {
            warn!("Could not build a resolver: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_applies_every_stage() {
        assert_eq!(
            clean("https://www.google.com/search?q=rust&sourceid=chrome&ei=abc&ved=xyz&client=firefox"),
            "https://google.com/search?q=rust"
        );
        assert_eq!(clean("example.com/"), "https://example.com/");
        assert_eq!(clean("example.com/docs///"), "https://example.com/docs");
        assert_eq!(
            clean("  http://example.com:80/a/b/?utm_medium=email&page=2  "),
            "http://example.com/a/b?page=2"
        );
    }

    #[test]
    fn test_clean_leaves_clean_urls_alone() {
        assert_eq!(
            clean("https://example.com/a?b=1#frag"),
            "https://example.com/a?b=1#frag"
        );
    }

    #[test]
    fn test_process_offline_screens_after_cleaning() {
        assert_eq!(
            Neutraliser::process_offline("example.com/?utm_source=x&id=1"),
            Outcome::Neutralised("https://example.com/?id=1".to_string())
        );
        assert_eq!(
            Neutraliser::process_offline("example.com/?backfill=1"),
            Outcome::Malicious(MaliceReason::ForbiddenParameter)
        );
        assert_eq!(
            Neutraliser::process_offline("javascript:alert(1)"),
            Outcome::Malicious(MaliceReason::Unparseable)
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = Outcome::Neutralised("https://example.com".to_string());
        assert!(ok.is_neutralised());
        assert_eq!(ok.url(), Some("https://example.com"));
        assert_eq!(ok.into_url(), Some("https://example.com".to_string()));

        let bad = Outcome::Unreachable(FailureKind::Timeout);
        assert!(!bad.is_neutralised());
        assert_eq!(bad.into_url(), None);
    }

    #[tokio::test]
    async fn test_neutralise_rejects_malicious_without_network() {
        assert_eq!(neutralise("https://example.com/?backfill=1").await, None);
        assert_eq!(neutralise("https://example.com/../../etc/passwd").await, None);
    }
}
