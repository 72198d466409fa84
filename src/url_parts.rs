//! Lossless textual view of a URL.
//!
//! `url::Url` re-serializes everything it parses (it adds a trailing `/` to
//! bare hosts, percent-encodes query characters, drops `../` segments), which
//! is fine for fetching but not for stages that must leave untouched parts
//! byte-identical, or for screening what the user actually typed. `UrlParts`
//! borrows slices of the input instead, and joins them back verbatim.

use std::borrow::Cow;
use std::fmt;

use url::form_urlencoded;

/// A URL split into borrowed components.
///
/// `scheme` and `authority` are both `Some` for absolute input
/// (`scheme://authority/path`) and both `None` otherwise, in which case the
/// whole pre-query text is the `path`. `query` is `Some("")` for a bare `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    pub fn split(url: &'a str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (scheme, authority, path) = match rest.split_once("://") {
            Some((scheme, after)) if is_scheme(scheme) => {
                let end = after.find(['/', '\\']).unwrap_or(after.len());
                (Some(scheme), Some(&after[..end]), &after[end..])
            }
            _ => (None, None, rest),
        };

        UrlParts {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Raw `&`-separated query segments, in order. Empty segments are kept.
    pub fn query_segments(&self) -> Vec<&'a str> {
        self.query
            .map(|q| q.split('&').collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for UrlParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = self.scheme {
            write!(f, "{}://", scheme)?;
        }
        if let Some(authority) = self.authority {
            f.write_str(authority)?;
        }
        f.write_str(self.path)?;
        if let Some(query) = self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// The `userinfo@host:port` pieces of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Authority<'a> {
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

impl<'a> Authority<'a> {
    pub fn split(authority: &'a str) -> Self {
        let (userinfo, host_port) = match authority.rsplit_once('@') {
            Some((userinfo, host_port)) => (Some(userinfo), host_port),
            None => (None, authority),
        };

        // Bracketed IPv6 literals contain colons of their own
        let (host, port) = if host_port.starts_with('[') {
            match host_port.find(']') {
                Some(end) => {
                    let (host, rest) = host_port.split_at(end + 1);
                    (host, rest.strip_prefix(':'))
                }
                None => (host_port, None),
            }
        } else {
            match host_port.rsplit_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (host_port, None),
            }
        };

        Authority {
            userinfo,
            host,
            port,
        }
    }
}

impl fmt::Display for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = self.userinfo {
            write!(f, "{}@", userinfo)?;
        }
        f.write_str(self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

/// Returns true if `s` is a syntactically valid URL scheme (RFC 3986 §3.1).
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Decoded key of a raw query segment (`a%5Fb=1` -> `a_b`).
pub(crate) fn segment_key(segment: &str) -> Option<Cow<'_, str>> {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(key, _)| key)
}

/// True for `key=` segments, and for empty segments left by `&&`.
pub(crate) fn segment_has_empty_value(segment: &str) -> bool {
    match segment.split_once('=') {
        Some((_, value)) => value.is_empty(),
        None => segment.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_url() {
        let parts = UrlParts::split("https://user@www.example.com:8443/a/b?x=1&y=2#frag");
        assert_eq!(parts.scheme, Some("https"));
        assert_eq!(parts.authority, Some("user@www.example.com:8443"));
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.query, Some("x=1&y=2"));
        assert_eq!(parts.fragment, Some("frag"));
    }

    #[test]
    fn test_split_bare_host() {
        let parts = UrlParts::split("https://example.com");
        assert_eq!(parts.authority, Some("example.com"));
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, None);
    }

    #[test]
    fn test_split_bare_question_mark() {
        let parts = UrlParts::split("https://example.com/page?");
        assert_eq!(parts.query, Some(""));
        assert_eq!(parts.query_segments(), vec![""]);
    }

    #[test]
    fn test_split_without_scheme() {
        let parts = UrlParts::split("example.com/page?q=1");
        assert_eq!(parts.scheme, None);
        assert_eq!(parts.authority, None);
        assert_eq!(parts.path, "example.com/page");
        assert_eq!(parts.query, Some("q=1"));
    }

    #[test]
    fn test_question_mark_in_fragment_is_not_a_query() {
        let parts = UrlParts::split("https://example.com/#/route?tab=1");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, Some("/route?tab=1"));
    }

    #[test]
    fn test_round_trip_is_verbatim() {
        for url in [
            "https://example.com",
            "https://example.com/",
            "https://example.com/page?",
            "https://example.com/a%20b?q=%3Cx%3E&&z#",
            "http://[2001:db8::1]:8080/p?q#f",
            "example.com/path",
            "",
        ] {
            assert_eq!(UrlParts::split(url).to_string(), url);
        }
    }

    #[test]
    fn test_authority_split() {
        let a = Authority::split("user:pass@www.example.com:443");
        assert_eq!(a.userinfo, Some("user:pass"));
        assert_eq!(a.host, "www.example.com");
        assert_eq!(a.port, Some("443"));
        assert_eq!(a.to_string(), "user:pass@www.example.com:443");

        let a = Authority::split("[2001:db8::1]:8080");
        assert_eq!(a.host, "[2001:db8::1]");
        assert_eq!(a.port, Some("8080"));

        let a = Authority::split("[2001:db8::1]");
        assert_eq!(a.host, "[2001:db8::1]");
        assert_eq!(a.port, None);

        let a = Authority::split("example.com");
        assert_eq!(a.userinfo, None);
        assert_eq!(a.port, None);
    }

    #[test]
    fn test_is_scheme() {
        assert!(is_scheme("https"));
        assert!(is_scheme("svn+ssh"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme("exa mple"));
    }

    #[test]
    fn test_segment_helpers() {
        assert_eq!(segment_key("utm%5Fsource=x").as_deref(), Some("utm_source"));
        assert_eq!(segment_key("flag").as_deref(), Some("flag"));
        assert_eq!(segment_key(""), None);

        assert!(segment_has_empty_value("param="));
        assert!(segment_has_empty_value(""));
        assert!(!segment_has_empty_value("param=1"));
        assert!(!segment_has_empty_value("flag"));
    }
}
