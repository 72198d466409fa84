//! Configuration constants.
//!
//! This module defines the thresholds used by the malice classifier and the
//! network bounds used by the resolver.

// Malice classifier thresholds
/// Maximum URL length in characters before a URL is treated as malicious.
/// Ordinary URLs stay well under this; 2500-character payloads trip it.
pub const MAX_URL_LENGTH: usize = 2000;
/// Maximum number of query parameters before a URL is treated as malicious.
/// Typical URLs carry fewer than 10; 20 parameters trips it.
pub const MAX_QUERY_PARAMS: usize = 15;
/// Maximum number of host labels in front of the registrable domain.
/// `news.ycombinator.com` has one; `a.b.c.d.example.com` (four) trips it.
pub const MAX_SUBDOMAIN_DEPTH: usize = 3;

// Resolver bounds
/// Overall time budget for resolving one URL, redirects included.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
/// TCP connection timeout for each hop.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 4;
/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Scheme prepended to input that has none.
pub const DEFAULT_SCHEME: &str = "https";

/// Default User-Agent string for HTTP requests.
///
/// Some sites answer bot-looking clients with a block page or a different
/// redirect, so the resolver presents itself as a desktop browser.
/// Override with `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// CLI defaults
/// URLs resolved in parallel by the CLI.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
