//! Malicious URL classification.
//!
//! Screens a URL against an ordered rule set before anything touches the
//! network: forbidden parameter names, injection signatures, path traversal,
//! and structural limits (length, parameter count, subdomain depth).
//!
//! Classification never fails. Input that cannot be parsed as an absolute
//! http(s) URL is itself treated as malicious.

mod rules;
mod subject;

use std::sync::LazyLock;

use log::debug;
use strum_macros::EnumIter as EnumIterMacro;

pub use rules::{default_rules, Rule, ALLOWED_SCHEMES};
pub use subject::Subject;

/// Why a URL was classified as malicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum MaliceReason {
    Unparseable,
    UnsupportedScheme,
    MissingHost,
    TooLong,
    ForbiddenParameter,
    TooManyParameters,
    TooManySubdomains,
    PathTraversal,
    ScriptInjection,
    SessionAccess,
    CommandInjection,
}

impl std::fmt::Display for MaliceReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MaliceReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaliceReason::Unparseable => "Unparseable URL",
            MaliceReason::UnsupportedScheme => "Unsupported scheme",
            MaliceReason::MissingHost => "Missing host",
            MaliceReason::TooLong => "URL too long",
            MaliceReason::ForbiddenParameter => "Forbidden parameter",
            MaliceReason::TooManyParameters => "Too many query parameters",
            MaliceReason::TooManySubdomains => "Too many subdomains",
            MaliceReason::PathTraversal => "Path traversal",
            MaliceReason::ScriptInjection => "Script injection",
            MaliceReason::SessionAccess => "Session/cookie access",
            MaliceReason::CommandInjection => "Command injection",
        }
    }
}

/// Result of classifying a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Malicious(MaliceReason),
}

impl Verdict {
    pub fn is_malicious(&self) -> bool {
        matches!(self, Verdict::Malicious(_))
    }

    pub fn reason(&self) -> Option<MaliceReason> {
        match self {
            Verdict::Clean => None,
            Verdict::Malicious(reason) => Some(*reason),
        }
    }
}

/// An ordered rule set, evaluated short-circuit on the first match.
#[derive(Debug)]
pub struct PatternSet {
    rules: Vec<Rule>,
}

impl PatternSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classifies `url` against this rule set.
    pub fn classify(&self, url: &str) -> Verdict {
        let subject = match Subject::prepare(url) {
            Ok(subject) => subject,
            Err(reason) => {
                debug!("Classified {} as malicious: {}", url, reason);
                return Verdict::Malicious(reason);
            }
        };

        match self.rules.iter().find_map(|rule| rule.evaluate(&subject)) {
            Some(reason) => {
                debug!("Classified {} as malicious: {}", url, reason);
                Verdict::Malicious(reason)
            }
            None => Verdict::Clean,
        }
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

static DEFAULT_PATTERNS: LazyLock<PatternSet> = LazyLock::new(PatternSet::default);

/// Classifies `url` with the built-in rule set, naming the first rule that fired.
///
/// # Examples
///
/// ```
/// use neutralise_link::{classify, MaliceReason, Verdict};
///
/// assert_eq!(classify("https://example.com/?param=value"), Verdict::Clean);
/// assert_eq!(
///     classify("https://example.com/?param=value&backfill=something"),
///     Verdict::Malicious(MaliceReason::ForbiddenParameter)
/// );
/// ```
pub fn classify(url: &str) -> Verdict {
    DEFAULT_PATTERNS.classify(url)
}

/// Returns true if `url` matches any malicious pattern, or cannot be parsed.
pub fn is_mal(url: &str) -> bool {
    classify(url).is_malicious()
}
