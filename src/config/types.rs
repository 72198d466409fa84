//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the resolver from library code.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the per-URL results printed on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `input -> result` lines
    Plain,
    /// One JSON object per line
    Json,
}

/// Resolver configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use neutralise_link::ResolverConfig;
/// use std::time::Duration;
///
/// let config = ResolverConfig {
///     timeout: Duration::from_secs(3),
///     ..Default::default()
/// };
/// assert_eq!(config.max_hops, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Overall time budget for one resolution, all hops included
    pub timeout: Duration,

    /// Maximum number of redirects to follow
    pub max_hops: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Allow loopback/private/link-local targets (disables the SSRF guard)
    pub allow_private_hosts: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_hops: MAX_REDIRECT_HOPS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allow_private_hosts: false,
        }
    }
}

/// Command-line options for the `neutralise_link` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "neutralise_link",
    version,
    about = "Strip tracking parameters from URLs, screen them and resolve them to their live destination"
)]
pub struct Cli {
    /// URLs to neutralise
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line ('-' reads stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Clean and classify only; never touch the network
    #[arg(long)]
    pub offline: bool,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Overall resolution timeout per URL, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Number of URLs processed in parallel
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Allow resolving loopback and private network addresses
    #[arg(long)]
    pub allow_private_hosts: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Cli> for ResolverConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            timeout: Duration::from_secs(cli.timeout_seconds),
            max_hops: cli.max_redirects,
            user_agent: cli.user_agent.clone(),
            allow_private_hosts: cli.allow_private_hosts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_resolver_config_default() {
        let config = ResolverConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(8));
        assert_eq!(config.max_hops, 10);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(!config.allow_private_hosts);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["neutralise_link", "example.com"]);
        assert_eq!(cli.urls, vec!["example.com".to_string()]);
        assert!(cli.file.is_none());
        assert!(!cli.offline);
        assert_eq!(cli.output, OutputFormat::Plain);
        assert_eq!(cli.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cli.max_redirects, MAX_REDIRECT_HOPS);
        assert_eq!(cli.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert!(matches!(cli.log_level, LogLevel::Info));
        assert!(matches!(cli.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_cli_into_resolver_config() {
        let cli = Cli::parse_from([
            "neutralise_link",
            "--timeout-seconds",
            "3",
            "--max-redirects",
            "2",
            "--user-agent",
            "test-agent/1.0",
            "--allow-private-hosts",
        ]);
        let config = ResolverConfig::from(&cli);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_hops, 2);
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert!(config.allow_private_hosts);
    }

    #[test]
    fn test_cli_rejects_unknown_output_format() {
        let result = Cli::try_parse_from(["neutralise_link", "--output", "xml"]);
        assert!(result.is_err());
    }
}
