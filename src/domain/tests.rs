// Domain module tests.

use super::*;

fn test_extractor() -> psl::List {
    psl::List
}

#[test]
fn test_extract_domain_basic() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://www.example.com/path").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_subdomain() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://cdn.assets.example.com/app.js").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_with_port_and_query() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://www.example.com:8080/gtm.js?id=GTM-XXXX").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_multi_part_tld() {
    let extractor = test_extractor();
    // Should return the registrable domain, not the public suffix
    assert_eq!(
        extract_domain(&extractor, "https://www.example.co.uk/a.js").unwrap(),
        "example.co.uk"
    );
}

#[test]
fn test_extract_domain_invalid_url() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "not-a-url").is_err());
}

#[test]
fn test_extract_domain_no_host() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "file:///path/to/file.js").is_err());
}

#[test]
fn test_extract_domain_rejects_ipv4() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "https://192.168.1.10/app.js").is_err());
}

#[test]
fn test_extract_domain_rejects_ipv6() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "https://[2001:db8::1]/app.js").is_err());
}

#[test]
fn test_registrable_host_basic() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_host(&extractor, "www.example.com").as_deref(),
        Some("example.com")
    );
    assert_eq!(
        registrable_host(&extractor, "example.com").as_deref(),
        Some("example.com")
    );
}

#[test]
fn test_registrable_host_ip_is_none() {
    let extractor = test_extractor();
    assert_eq!(registrable_host(&extractor, "192.168.1.10"), None);
}

#[test]
fn test_normalize_primary_domain_passthrough() {
    assert_eq!(
        normalize_primary_domain("example.com").unwrap(),
        "example.com"
    );
}

#[test]
fn test_normalize_primary_domain_lowercases_and_trims() {
    assert_eq!(
        normalize_primary_domain("  Example.COM  ").unwrap(),
        "example.com"
    );
}

#[test]
fn test_normalize_primary_domain_strips_scheme_and_path() {
    assert_eq!(
        normalize_primary_domain("https://example.com/shop").unwrap(),
        "example.com"
    );
    assert_eq!(
        normalize_primary_domain("http://example.com:8080").unwrap(),
        "example.com"
    );
}

#[test]
fn test_normalize_primary_domain_strips_dots() {
    assert_eq!(
        normalize_primary_domain(".example.com.").unwrap(),
        "example.com"
    );
}

#[test]
fn test_normalize_primary_domain_keeps_subdomain() {
    // A subdomain is passed through as declared, not reduced
    assert_eq!(
        normalize_primary_domain("shop.example.com").unwrap(),
        "shop.example.com"
    );
}

#[test]
fn test_normalize_primary_domain_empty_is_error() {
    assert!(normalize_primary_domain("").is_err());
    assert!(normalize_primary_domain("   ").is_err());
    assert!(normalize_primary_domain("https://").is_err());
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_extract_domain_subdomains_preserve_root(
        subdomain in prop::collection::vec("[a-z]{2,10}", 1..4),
        domain in "[a-z]{5,15}",
        tld in "(com|org|net)"
    ) {
        let extractor = test_extractor();
        let root_url = format!("https://{}.{}", domain, tld);
        let root = extract_domain(&extractor, &root_url).ok();

        if let Some(root) = root {
            let sub_url = format!("https://{}.{}.{}", subdomain.join("."), domain, tld);
            let sub = extract_domain(&extractor, &sub_url).ok();
            prop_assert_eq!(Some(root), sub,
                "Subdomains should extract to the same root domain");
        }
    }

    #[test]
    fn test_normalize_primary_domain_idempotent(raw in "[a-z]{1,10}(\\.[a-z]{1,10}){0,3}") {
        let once = normalize_primary_domain(&raw).unwrap();
        let twice = normalize_primary_domain(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_extract_domain_no_panic(url in "https?://[a-zA-Z0-9.-]{1,60}.*") {
        let extractor = test_extractor();
        let _result = extract_domain(&extractor, &url);
    }
}
