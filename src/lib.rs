//! neutralise_link library: URL cleaning, screening and resolution
//!
//! Turns a user-supplied link into a safe, canonical, live URL: referrer and
//! tracking parameters are removed, the textual form is compacted, the result
//! is screened against malicious patterns and, only if it passes, resolved
//! through its redirect chain to the final destination.
//!
//! # Example
//!
//! ```no_run
//! use neutralise_link::{Neutraliser, Outcome, ResolverConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let neutraliser = Neutraliser::new(ResolverConfig::default())?;
//!
//! match neutraliser.process("www.example.com/?utm_source=news&id=7").await {
//!     Outcome::Neutralised(url) => println!("{url}"),
//!     Outcome::Malicious(reason) => println!("rejected: {reason}"),
//!     Outcome::Unreachable(kind) => println!("unreachable: {kind}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The offline stages are plain functions:
//!
//! ```
//! use neutralise_link::{compactify, is_mal, rem_refs, rem_trackers};
//!
//! let url = rem_trackers(&rem_refs("https://www.example.com/?utm_source=x&id=7&gclid=abc"));
//! assert_eq!(compactify(&url), "https://example.com/?id=7");
//! assert!(!is_mal(&url));
//! ```
//!
//! # Requirements
//!
//! Resolution requires a Tokio runtime.

mod app;
mod compact;
pub mod config;
mod error_handling;
pub mod initialization;
mod malice;
mod params;
mod pipeline;
mod resolve;
mod run;
mod url_parts;

// Re-export public API
pub use app::{ensure_scheme, render, ResultRecord};
pub use compact::compactify;
pub use config::{Cli, LogFormat, LogLevel, OutputFormat, ResolverConfig};
pub use error_handling::{FailureKind, InitializationError, ResolveError, RunStats};
pub use malice::{
    classify, default_rules, is_mal, MaliceReason, PatternSet, Rule, Subject, Verdict,
};
pub use params::{rem_refs, rem_trackers, strip_params, REFERRER_PARAMS, TRACKER_PARAMS};
pub use pipeline::{clean, neutralise, Neutraliser, Outcome};
pub use resolve::{is_valid, validate_url_safe, Resolution, Resolver};
pub use run::{run_batch, RunReport};
