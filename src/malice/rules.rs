//! Classifier rules.
//!
//! Each rule is a tagged variant evaluated against a prepared `Subject`.
//! Rules are checked in order and the first match wins, so cheap structural
//! checks come before the regex signatures.

use regex::Regex;
use url::Host;

use super::subject::{percent_decode, Subject};
use super::MaliceReason;
use crate::config::{MAX_QUERY_PARAMS, MAX_SUBDOMAIN_DEPTH, MAX_URL_LENGTH};

/// Parameter names that mark a URL as malicious whatever their value.
pub const FORBIDDEN_PARAMS: &[&str] = &["backfill"];

/// Schemes a neutralised URL may carry.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Query keys whose values are treated as file paths.
pub const FILE_PARAM_KEYS: &[&str] = &[
    "file", "filename", "filepath", "path", "dir", "folder", "doc", "document", "page",
    "template", "include", "inc", "load", "read", "download", "view", "conf", "config",
];

/// Script and markup injection.
const SCRIPT_SIGNATURES: &[&str] = &[
    r"<\s*/?\s*script\b",
    r"\b(?:java|vb)script\s*:",
    r#"(?:^|[\s"'(=])data:[a-z]+/[a-z0-9.+-]+[;,]"#,
    r"\bon(?:abort|blur|change|click|dblclick|error|focus|input|keydown|keyup|load|mouseout|mouseover|submit|unload)\s*=",
    r"<\s*(?:iframe|object|embed|svg|img)\b",
    r"\beval\s*\(",
    r"\bnew\s+function\s*\(",
];

/// Reads of cookies and browser storage.
const SESSION_SIGNATURES: &[&str] = &[
    r"\bdocument\s*\.\s*(?:cookie|domain)\b",
    r"\bdocument\s*\.\s*write(?:ln)?\s*\(",
    r"\bwindow\s*\.\s*(?:local|session)storage\b",
    r"\b(?:local|session)storage\s*\.\s*(?:get|set|remove)item\s*\(",
];

/// Shell command invocations.
const COMMAND_SIGNATURES: &[&str] = &[
    // Pager and text-tool words only count when a path argument follows
    r"(?:^|[\s;|&`(])(?:cat|more|less|head|tail|nl|tac)\s+(?:-[a-z0-9]+\s+)*(?:[/~]|\.{1,2}/)",
    r"(?:^|[;|&`(])\s*rm\s+-[a-z]*[rf]",
    r"(?:^|[;|&`(])\s*ls\s+-[a-z]+",
    r"\b(?:wget|curl)\s+(?:-\S+\s+)*(?:https?|ftp)://",
    r"[;|`]\s*(?:sh|bash|zsh|nc|netcat|python|perl)\b",
    r"\$\([^)]*\)",
    r"/etc/(?:passwd|shadow|hosts)\b",
    r"/bin/(?:ba|z)?sh\b",
    r"\bcmd(?:\.exe)?\s+/c\b",
];

/// A single classifier rule.
#[derive(Debug)]
pub enum Rule {
    /// More characters than allowed
    MaxLength(usize),
    /// Scheme outside the allow-list
    AllowedSchemes(&'static [&'static str]),
    /// No host component
    RequireHost,
    /// A query key from the block-list, any value
    ForbiddenParams(&'static [&'static str]),
    /// More query parameters than allowed
    MaxQueryParams(usize),
    /// More labels in front of the registrable domain than allowed
    MaxSubdomainDepth(usize),
    /// `../` in the path or in a file-like parameter
    PathTraversal,
    /// A regex over every decoded text component
    Signature {
        reason: MaliceReason,
        pattern: Regex,
    },
}

impl Rule {
    /// Returns the reason this rule flags `subject`, if it does.
    pub fn evaluate(&self, subject: &Subject<'_>) -> Option<MaliceReason> {
        let matched = match self {
            Rule::MaxLength(max) => subject.raw.chars().count() > *max,
            Rule::AllowedSchemes(schemes) => !schemes.contains(&subject.url.scheme()),
            Rule::RequireHost => subject.url.host_str().map_or(true, str::is_empty),
            Rule::ForbiddenParams(names) => subject
                .params
                .iter()
                .any(|(key, _)| names.contains(&key.as_str())),
            Rule::MaxQueryParams(max) => subject.params.len() > *max,
            Rule::MaxSubdomainDepth(max) => match subject.url.host() {
                Some(Host::Domain(domain)) => subdomain_depth(domain) > *max,
                _ => false,
            },
            Rule::PathTraversal => {
                has_traversal(&subject.path)
                    || subject.params.iter().any(|(key, value)| {
                        is_file_param(key)
                            && (has_traversal(value) || has_traversal(&percent_decode(value)))
                    })
            }
            Rule::Signature { pattern, .. } => subject.texts().any(|text| pattern.is_match(text)),
        };
        matched.then(|| self.reason())
    }

    /// The reason reported when this rule matches.
    pub fn reason(&self) -> MaliceReason {
        match self {
            Rule::MaxLength(_) => MaliceReason::TooLong,
            Rule::AllowedSchemes(_) => MaliceReason::UnsupportedScheme,
            Rule::RequireHost => MaliceReason::MissingHost,
            Rule::ForbiddenParams(_) => MaliceReason::ForbiddenParameter,
            Rule::MaxQueryParams(_) => MaliceReason::TooManyParameters,
            Rule::MaxSubdomainDepth(_) => MaliceReason::TooManySubdomains,
            Rule::PathTraversal => MaliceReason::PathTraversal,
            Rule::Signature { reason, .. } => *reason,
        }
    }
}

/// The built-in rule set, cheapest checks first.
pub fn default_rules() -> Vec<Rule> {
    let mut rules = vec![
        Rule::MaxLength(MAX_URL_LENGTH),
        Rule::AllowedSchemes(ALLOWED_SCHEMES),
        Rule::RequireHost,
        Rule::ForbiddenParams(FORBIDDEN_PARAMS),
        Rule::MaxQueryParams(MAX_QUERY_PARAMS),
        Rule::MaxSubdomainDepth(MAX_SUBDOMAIN_DEPTH),
        Rule::PathTraversal,
    ];
    rules.extend(signatures(MaliceReason::ScriptInjection, SCRIPT_SIGNATURES));
    rules.extend(signatures(MaliceReason::SessionAccess, SESSION_SIGNATURES));
    rules.extend(signatures(MaliceReason::CommandInjection, COMMAND_SIGNATURES));
    rules
}

fn signatures(
    reason: MaliceReason,
    patterns: &'static [&'static str],
) -> impl Iterator<Item = Rule> {
    patterns
        .iter()
        .filter_map(move |p| match Regex::new(&format!("(?i){}", p)) {
            Ok(pattern) => Some(Rule::Signature { reason, pattern }),
            Err(e) => {
                log::error!("Skipping invalid {} signature '{}': {}", reason, p, e);
                None
            }
        })
}

/// Number of host labels in front of the registrable domain.
///
/// Falls back to treating the last two labels as registrable when the host
/// has no known public suffix.
pub fn subdomain_depth(host: &str) -> usize {
    let host = host.trim_end_matches('.');
    let labels = host.split('.').count();
    let registrable = psl::domain_str(host)
        .map(|domain| domain.split('.').count())
        .unwrap_or_else(|| labels.min(2));
    labels.saturating_sub(registrable)
}

/// True if any `/`- or `\`-separated segment is exactly `..`.
fn has_traversal(text: &str) -> bool {
    text.split(['/', '\\']).any(|segment| segment == "..")
}

fn is_file_param(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    FILE_PARAM_KEYS.contains(&key.as_str())
}
