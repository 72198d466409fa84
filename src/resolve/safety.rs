//! Redirect-target validation and SSRF protection.
//!
//! Every hop of a redirect chain is checked before it is fetched, so a public
//! URL cannot bounce the resolver into `file://`, `localhost`, or an address
//! on the local network.

use std::net::{Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

use crate::error_handling::ResolveError;
use crate::malice::ALLOWED_SCHEMES;

/// Validates that a URL is safe to fetch.
///
/// Only http/https are allowed. Unless `allow_private_hosts` is set, the host
/// must not be a localhost name or a loopback, private, link-local,
/// unspecified, multicast or broadcast address.
///
/// # Errors
///
/// Returns `ResolveError::UnsafeTarget` describing the first problem found.
pub fn validate_url_safe(url: &Url, allow_private_hosts: bool) -> Result<(), ResolveError> {
    let unsafe_target = |reason: String| ResolveError::UnsafeTarget {
        url: url.to_string(),
        reason,
    };

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(unsafe_target(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }

    let host = url
        .host()
        .ok_or_else(|| unsafe_target("no host component".to_string()))?;
    if allow_private_hosts {
        return Ok(());
    }

    match host {
        Host::Domain(domain) if is_localhost_domain(domain) => Err(unsafe_target(format!(
            "localhost domain '{}'",
            domain
        ))),
        Host::Ipv4(ip) if is_private_ipv4(ip) => {
            Err(unsafe_target(format!("private IPv4 address '{}'", ip)))
        }
        Host::Ipv6(ip) if is_private_ipv6(ip) => {
            Err(unsafe_target(format!("private IPv6 address '{}'", ip)))
        }
        _ => Ok(()),
    }
}

fn is_private_ipv4(ip: Ipv4Addr) -> bool {
    ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_multicast()
        || ip.is_broadcast()
        // 0.0.0.0/8 and 240.0.0.0/4
        || ip.octets()[0] == 0
        || ip.octets()[0] >= 240
}

fn is_private_ipv6(ip: Ipv6Addr) -> bool {
    if let Some(v4) = ip.to_ipv4_mapped() {
        return is_private_ipv4(v4);
    }
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        || ip.is_multicast()
        // fc00::/7 unique local
        || (first & 0xfe00) == 0xfc00
        // fe80::/10 link-local
        || (first & 0xffc0) == 0xfe80
}

fn is_localhost_domain(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();
    domain == "localhost" || domain == "localhost.localdomain" || domain.ends_with(".localhost")
}
