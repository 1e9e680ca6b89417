//! Domain extraction and normalization utilities.
//!
//! This module provides functions to extract registrable domains from URLs
//! and hosts using the Public Suffix List (PSL), and to normalize the
//! primary domain supplied by the operator.
//!
//! Key functions:
//! - `extract_domain()` - Extracts the registrable domain from a URL
//! - `registrable_host()` - Extracts the registrable domain from a bare host
//! - `normalize_primary_domain()` - Normalizes the declared primary domain

use anyhow::{Context, Result};
use psl::Psl;

/// Extracts the registrable domain from a URL using the PSL.
///
/// # Arguments
///
/// * `list` - The Public Suffix List handle
/// * `url` - The URL to extract the domain from
///
/// # Returns
///
/// The registrable domain (e.g., "example.com" from "https://www.example.com/path"),
/// handling both simple TLDs (e.g., "example.com") and multi-part TLDs
/// (e.g., "example.co.uk").
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, if the URL has no host or
/// an IP-address host, or if the PSL has no match for the host.
pub fn extract_domain(list: &psl::List, url: &str) -> Result<String> {
    let parsed = url::Url::parse(url).with_context(|| format!("Failed to parse URL: {}", url))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("URL '{}' has no host component", url))?;

    // IP addresses do not have registrable domains
    if matches!(
        parsed.host(),
        Some(url::Host::Ipv4(_) | url::Host::Ipv6(_))
    ) {
        return Err(anyhow::anyhow!(
            "IP addresses do not have registrable domains: {}",
            host
        ));
    }

    registrable_host(list, host)
        .ok_or_else(|| anyhow::anyhow!("No registrable domain found in URL: {}", url))
}

/// Extracts the registrable domain from a bare host.
///
/// Returns `None` for IP addresses and hosts the PSL cannot resolve to a
/// registrable domain (e.g., a bare public suffix or a single label).
pub fn registrable_host(list: &psl::List, host: &str) -> Option<String> {
    if host.parse::<std::net::Ipv4Addr>().is_ok() || host.parse::<std::net::Ipv6Addr>().is_ok() {
        return None;
    }

    list.domain(host.as_bytes())
        .map(|domain| String::from_utf8_lossy(domain.as_bytes()).into_owned())
}

/// Normalizes the operator-supplied primary domain.
///
/// Accepts a bare domain or a URL-shaped value: trims whitespace, lowercases,
/// strips an `http://`/`https://` prefix along with any path or port, and
/// removes leading and trailing dots. The value is otherwise passed through
/// as given; it is not reduced to its registrable domain.
///
/// # Errors
///
/// Returns an error if nothing remains after normalization.
pub fn normalize_primary_domain(raw: &str) -> Result<String> {
    let lowered = raw.trim().to_ascii_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let host_part = without_scheme.split(['/', ':']).next().unwrap_or("");
    let normalized = host_part.trim_matches('.');

    if normalized.is_empty() {
        anyhow::bail!("Primary domain must not be empty");
    }

    Ok(normalized.to_string())
}
