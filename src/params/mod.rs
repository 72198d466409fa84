//! Referrer and tracker parameter removal.
//!
//! Key functions:
//! - `rem_refs()` - Drops referrer/campaign parameters
//! - `rem_trackers()` - Drops analytics/click-id parameters
//! - `strip_params()` - The shared engine, for callers with their own key set

mod rules;

use std::collections::HashSet;

use log::debug;

pub use rules::{REFERRER_PARAMS, TRACKER_PARAMS};

use crate::url_parts::{segment_key, UrlParts};

/// Removes every query parameter whose key is a known referrer parameter.
///
/// Surviving parameters keep their order and original encoding. A URL with no
/// matching parameter is returned byte-identical.
///
/// # Examples
///
/// ```
/// use neutralise_link::rem_refs;
///
/// assert_eq!(
///     rem_refs("https://example.com/?query=test&sourceid=chrome&utm_source=newsletter"),
///     "https://example.com/?query=test"
/// );
/// ```
pub fn rem_refs(url: &str) -> String {
    strip_params(url, &REFERRER_PARAMS)
}

/// Removes every query parameter whose key is a known tracker parameter.
///
/// # Examples
///
/// ```
/// use neutralise_link::rem_trackers;
///
/// assert_eq!(
///     rem_trackers("https://example.com/?q=test&ei=12345&gclid=abc"),
///     "https://example.com/?q=test"
/// );
/// ```
pub fn rem_trackers(url: &str) -> String {
    strip_params(url, &TRACKER_PARAMS)
}

/// Removes every query parameter whose decoded key is in `names`.
///
/// Matching is exact and case-sensitive. If no parameter survives, the `?` is
/// dropped too. Input without a query string is returned as-is.
pub fn strip_params(url: &str, names: &HashSet<&str>) -> String {
    let parts = UrlParts::split(url);
    let segments = parts.query_segments();
    if segments.is_empty() {
        return url.to_string();
    }

    let kept: Vec<&str> = segments
        .iter()
        .copied()
        .filter(|segment| !segment_key(segment).is_some_and(|key| names.contains(key.as_ref())))
        .collect();

    if kept.len() == segments.len() {
        return url.to_string();
    }
    debug!(
        "Stripped {} parameter(s) from {}",
        segments.len() - kept.len(),
        url
    );

    let query = (!kept.is_empty()).then(|| kept.join("&"));
    UrlParts {
        query: query.as_deref(),
        ..parts
    }
    .to_string()
}
