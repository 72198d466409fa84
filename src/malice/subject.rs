//! The prepared view of a URL that classifier rules inspect.

use percent_encoding::percent_decode_str;
use url::{form_urlencoded, Url};

use super::MaliceReason;
use crate::url_parts::UrlParts;

/// A URL prepared once for every rule.
///
/// `url` is the parsed form; `path`, `params` and `fragment` are decoded from
/// the raw text instead, because the parser already resolves `../` segments
/// and re-encodes characters the signatures look for.
#[derive(Debug)]
pub struct Subject<'a> {
    pub raw: &'a str,
    pub url: Url,
    /// Raw path, percent-decoded twice to unwrap double encoding
    pub path: String,
    /// Decoded query pairs from the raw query, in order
    pub params: Vec<(String, String)>,
    pub fragment: String,
}

impl<'a> Subject<'a> {
    /// Parses and decodes `raw`. Unparseable input is reported as the reason
    /// it is malicious.
    pub fn prepare(raw: &'a str) -> Result<Self, MaliceReason> {
        let url = Url::parse(raw).map_err(|_| MaliceReason::Unparseable)?;
        let parts = UrlParts::split(raw);

        let params = parts
            .query
            .map(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Subject {
            raw,
            url,
            path: percent_decode(&percent_decode(parts.path)),
            params,
            fragment: parts.fragment.map(percent_decode).unwrap_or_default(),
        })
    }

    /// Every decoded piece of text a signature may hide in.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.path.as_str())
            .chain(
                self.params
                    .iter()
                    .flat_map(|(key, value)| [key.as_str(), value.as_str()]),
            )
            .chain(std::iter::once(self.fragment.as_str()))
    }
}

pub(crate) fn percent_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}
