// Extractor tests.

use super::*;

fn extract(text: &str) -> Vec<ScriptReference> {
    let mut stats = ScanStats::new();
    extract_references(text, &mut stats)
}

#[test]
fn test_extract_bare_url() {
    let refs = extract("https://www.googletagmanager.com/gtm.js?id=GTM-XXXX\n");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].url, "https://www.googletagmanager.com/gtm.js?id=GTM-XXXX");
    assert_eq!(refs[0].host.as_deref(), Some("www.googletagmanager.com"));
    assert_eq!(refs[0].source, SourceForm::BareUrl);
    assert_eq!(refs[0].line, 1);
}

#[test]
fn test_extract_script_tag_src() {
    let refs = extract(r#"<script src="https://example.com/js/app.bundle.js"></script>"#);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].url, "https://example.com/js/app.bundle.js");
    assert_eq!(refs[0].source, SourceForm::MarkupAttr);
}

#[test]
fn test_extract_script_tag_single_quotes_and_attrs() {
    let refs = extract(r#"<script async defer src='https://js.stripe.com/v3/'></script>"#);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].url, "https://js.stripe.com/v3/");
    assert_eq!(refs[0].host.as_deref(), Some("js.stripe.com"));
}

#[test]
fn test_extract_multiple_urls_per_line() {
    let refs = extract("https://a.example.net/one.js https://b.example.net/two.js\n");
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].host.as_deref(), Some("a.example.net"));
    assert_eq!(refs[1].host.as_deref(), Some("b.example.net"));
}

#[test]
fn test_extract_order_is_first_occurrence() {
    let text = "\
https://second-seen.example.net/b.js
https://first-seen.example.net/a.js
https://second-seen.example.net/b.js
";
    let refs = extract(text);
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].host.as_deref(), Some("second-seen.example.net"));
    assert_eq!(refs[1].host.as_deref(), Some("first-seen.example.net"));
}

#[test]
fn test_duplicates_suppressed_case_insensitive_host() {
    let mut stats = ScanStats::new();
    let text = "\
https://CDN.Example.com/lib.js
https://cdn.example.com/lib.js
";
    let refs = extract_references(text, &mut stats);
    assert_eq!(refs.len(), 1);
    // First occurrence wins, as written
    assert_eq!(refs[0].url, "https://CDN.Example.com/lib.js");
    assert_eq!(stats.info_count(InfoType::DuplicateSuppressed), 1);
}

#[test]
fn test_duplicate_across_surface_forms() {
    let text = r#"<script src="https://cdn.example.com/lib.js"></script>
https://cdn.example.com/lib.js
"#;
    let refs = extract(text);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].source, SourceForm::MarkupAttr);
}

#[test]
fn test_fragment_ignored_for_dedup() {
    let text = "\
https://cdn.example.com/lib.js#a
https://cdn.example.com/lib.js#b
";
    let refs = extract(text);
    assert_eq!(refs.len(), 1);
}

#[test]
fn test_comment_lines_skipped() {
    let text = "\
# https://commented.example.net/a.js
// https://commented.example.net/b.js
<!-- https://commented.example.net/c.js -->
https://kept.example.net/d.js
";
    let refs = extract(text);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].host.as_deref(), Some("kept.example.net"));
}

#[test]
fn test_blank_lines_skipped() {
    let refs = extract("\n   \n\t\nhttps://kept.example.net/a.js\n\n");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].line, 4);
}

#[test]
fn test_protocol_relative_src_normalized() {
    let refs = extract(r#"<script src="//cdn.example.net/lib.js"></script>"#);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].url, "https://cdn.example.net/lib.js");
    assert_eq!(refs[0].host.as_deref(), Some("cdn.example.net"));
}

#[test]
fn test_relative_src_counted_not_emitted() {
    let mut stats = ScanStats::new();
    let text = r#"<script src="/js/app.js"></script>"#;
    let refs = extract_references(text, &mut stats);
    assert!(refs.is_empty());
    assert_eq!(stats.warning_count(WarningType::RelativeUrlSkipped), 1);
}

#[test]
fn test_bare_scheme_token_is_emitted() {
    // A scheme with nothing after it still becomes a reference; the
    // classifier is responsible for flagging it
    let refs = extract("https://\n");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].url, "https://");
    assert_eq!(refs[0].host, None);
}

#[test]
fn test_non_url_lines_produce_nothing() {
    let refs = extract("just some prose about scripts\nwindow.loadScript();\n");
    assert!(refs.is_empty());
}

#[test]
fn test_overlong_url_skipped() {
    let url = format!("https://example.com/{}", "a".repeat(2100));
    let refs = extract(&url);
    assert!(refs.is_empty());
}

#[test]
fn test_mixed_line_attr_before_bare() {
    let text =
        r#"<script src="https://attr.example.net/a.js"></script> https://bare.example.net/b.js"#;
    let refs = extract(text);
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].source, SourceForm::MarkupAttr);
    assert_eq!(refs[0].host.as_deref(), Some("attr.example.net"));
    assert_eq!(refs[1].source, SourceForm::BareUrl);
}

#[test]
fn test_http_scheme_accepted() {
    let refs = extract("http://legacy.example.net/old.js\n");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].host.as_deref(), Some("legacy.example.net"));
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_extract_no_panic_on_arbitrary_text(text in ".{0,500}") {
        let mut stats = ScanStats::new();
        let _refs = extract_references(&text, &mut stats);
    }

    #[test]
    fn test_extract_unique_normalized_urls(
        hosts in prop::collection::vec("[a-z]{3,10}\\.(com|net|org)", 1..8)
    ) {
        let text: String = hosts
            .iter()
            .map(|h| format!("https://{}/app.js\n", h))
            .collect();
        let mut stats = ScanStats::new();
        let refs = extract_references(&text, &mut stats);

        let mut unique: std::collections::HashSet<String> = std::collections::HashSet::new();
        for h in &hosts {
            unique.insert(h.clone());
        }
        prop_assert_eq!(refs.len(), unique.len());
    }
}
