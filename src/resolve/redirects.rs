//! HTTP redirect chain resolution.
//!
//! Redirects are followed manually so every hop can be validated before it is
//! requested and the full path from the first URL to the live destination is
//! recorded.

use log::{debug, warn};
use reqwest::{header::LOCATION, StatusCode, Url};

use super::safety::validate_url_safe;
use super::Resolution;
use crate::config::ResolverConfig;
use crate::error_handling::ResolveError;

/// Follows the redirect chain starting at `start`, up to `config.max_hops` redirects.
///
/// The first response that is not a redirect ends the chain. Its URL is the
/// final destination, whatever its status.
///
/// # Errors
///
/// Returns an error if a hop is unsafe, a request fails, a redirect has no
/// usable `Location`, or the chain is still redirecting after `max_hops`.
pub(crate) async fn follow_redirects(
    start: Url,
    client: &reqwest::Client,
    config: &ResolverConfig,
) -> Result<Resolution, ResolveError> {
    let mut chain: Vec<String> = Vec::new();
    let mut current = start;

    loop {
        validate_url_safe(&current, config.allow_private_hosts)?;
        chain.push(current.to_string());

        let resp = client.get(current.clone()).send().await?;
        let status = resp.status();

        if !is_redirect(status) {
            if status.is_client_error() || status.is_server_error() {
                warn!("{} answered with status {}", current, status.as_u16());
            }
            return Ok(Resolution {
                final_url: current.to_string(),
                chain,
                status: status.as_u16(),
            });
        }

        // Redirects followed so far is chain.len() - 1
        if chain.len() > config.max_hops {
            return Err(ResolveError::TooManyRedirects {
                url: chain[0].clone(),
                max_hops: config.max_hops,
            });
        }

        let location = resp
            .headers()
            .get(LOCATION)
            .ok_or_else(|| ResolveError::MissingLocation {
                url: current.to_string(),
                status: status.as_u16(),
            })?;
        let location = location
            .to_str()
            .map_err(|_| ResolveError::InvalidLocation {
                url: current.to_string(),
                location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
            })?;
        // join() also accepts absolute locations
        let next = current
            .join(location)
            .map_err(|_| ResolveError::InvalidLocation {
                url: current.to_string(),
                location: location.to_string(),
            })?;

        debug!("{} {} -> {}", status.as_u16(), current, next);
        current = next;
    }
}

/// Statuses that carry a `Location` to follow (301, 302, 303, 307, 308).
pub(crate) fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}
