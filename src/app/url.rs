//! Scheme defaulting for user-supplied URLs.

use crate::config::DEFAULT_SCHEME;
use crate::url_parts::is_scheme;

/// Trims `url` and prefixes `https://` unless it already starts with `scheme://`.
///
/// Any existing scheme is kept as is, including non-web ones, so the
/// classifier can reject them instead of having them disguised as a host.
///
/// # Examples
///
/// ```
/// use neutralise_link::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com/a"), "https://example.com/a");
/// assert_eq!(ensure_scheme(" http://example.com "), "http://example.com");
/// assert_eq!(ensure_scheme("ftp://example.com"), "ftp://example.com");
/// ```
pub fn ensure_scheme(url: &str) -> String {
    let url = url.trim();
    match url.split_once("://") {
        Some((scheme, _)) if is_scheme(scheme) => url.to_string(),
        _ => format!("{}://{}", DEFAULT_SCHEME, url),
    }
}
