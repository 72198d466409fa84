//! URL compactification.
//!
//! Rewrites a URL into its shortest equivalent surface form without changing
//! where it points: no `www.` prefix, no default port, no empty parameters,
//! no empty `?`, no trailing `/`.

use log::debug;

use crate::url_parts::{segment_has_empty_value, Authority, UrlParts};

/// Compacts a URL's textual form.
///
/// Applies, in order:
/// 1. strip leading `www.` labels from the host (never the last dot-less label),
/// 2. strip the port if it is the scheme default (80 for http, 443 for https),
/// 3. drop query parameters with an empty value (`key=`),
/// 4. drop the `?` if no parameter is left,
/// 5. drop trailing `/` from the path unless the path is just `/`.
///
/// The scheme, userinfo, non-empty parameters and the fragment are left alone.
/// The operation is idempotent.
///
/// # Examples
///
/// ```
/// use neutralise_link::compactify;
///
/// assert_eq!(compactify("https://www.example.com:443/page/?param="), "https://example.com/page");
/// assert_eq!(compactify("https://example.com/"), "https://example.com/");
/// ```
pub fn compactify(url: &str) -> String {
    let parts = UrlParts::split(url);

    let authority = match (parts.scheme, parts.authority) {
        (Some(scheme), Some(authority)) => Some(compact_authority(scheme, authority)),
        _ => None,
    };
    let query = parts.query.and_then(compact_query);

    let compacted = UrlParts {
        authority: authority.as_deref().or(parts.authority),
        path: compact_path(parts.path),
        query: query.as_deref(),
        ..parts
    }
    .to_string();

    if compacted != url {
        debug!("Compacted {} to {}", url, compacted);
    }
    compacted
}

fn compact_authority(scheme: &str, authority: &str) -> String {
    let parts = Authority::split(authority);
    // More than one port separator: not a host:port pair, leave it as given
    if !parts.host.starts_with('[') && parts.host.contains(':') {
        return authority.to_string();
    }
    let default_port = default_port(scheme);
    let port = parts.port.filter(|port| {
        !port.is_empty() && port.parse::<u16>().ok() != default_port
    });

    Authority {
        host: strip_www(parts.host),
        port,
        ..parts
    }
    .to_string()
}

fn default_port(scheme: &str) -> Option<u16> {
    if scheme.eq_ignore_ascii_case("http") {
        Some(80)
    } else if scheme.eq_ignore_ascii_case("https") {
        Some(443)
    } else {
        None
    }
}

/// Strips leading `www.` labels as long as a dotted name remains.
fn strip_www(mut host: &str) -> &str {
    loop {
        let rest = match host.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
            _ => return host,
        };
        if !rest.contains('.') {
            return host;
        }
        host = rest;
    }
}

fn compact_query(query: &str) -> Option<String> {
    let kept: Vec<&str> = query
        .split('&')
        .filter(|segment| !segment_has_empty_value(segment))
        .collect();
    (!kept.is_empty()).then(|| kept.join("&"))
}

fn compact_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && !path.is_empty() {
        "/"
    } else {
        trimmed
    }
}
