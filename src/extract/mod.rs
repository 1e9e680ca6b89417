//! Script reference extraction.
//!
//! Scans raw input text line by line and produces an ordered, deduplicated
//! sequence of [`ScriptReference`]s. Two surface forms are recognized: the
//! quoted `src` attribute of a `<script>` tag, and standalone absolute URLs
//! appearing anywhere in a line. Extraction is pure text-to-data; no line
//! is ever fatal.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::{InfoType, ScanStats, WarningType};
use crate::models::{ScriptReference, SourceForm};

/// Helper to compile a static regex pattern, panicking with a detailed
/// message if compilation fails. Only used for compile-time constant
/// patterns, where failure is a programming error.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

// src="..." or src='...' inside a <script> tag
static SCRIPT_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)<script\b[^>]*?\bsrc\s*=\s*["']([^"']*)["']"#,
        "SCRIPT_SRC_RE",
    )
});

// A standalone absolute URL. The tail is `*` rather than `+` so that a bare
// scheme token like `https://` is still extracted and can be flagged as
// malformed downstream instead of silently disappearing.
static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r#"(?i)\bhttps?://[^\s"'<>()]*"#, "BARE_URL_RE"));

/// Extracts an ordered sequence of unique script references from the input
/// text.
///
/// Ordering follows first occurrence; duplicates by normalized URL are
/// suppressed after the first. Lines whose trimmed form starts with `#`,
/// `//`, or `<!--` are treated as comments and skipped. `src` values with
/// no scheme and no `//` prefix are relative references: they are counted
/// in `stats` but not emitted.
pub fn extract_references(text: &str, stats: &mut ScanStats) -> Vec<ScriptReference> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut references = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty()
            || line.starts_with('#')
            || line.starts_with("//")
            || line.starts_with("<!--")
        {
            continue;
        }

        // Attribute values first, so a URL quoted in a src attribute keeps
        // its markup provenance; remember the spans so the bare-URL pass
        // does not visit the same text again.
        let mut attr_spans: Vec<(usize, usize)> = Vec::new();
        for captures in SCRIPT_SRC_RE.captures_iter(line) {
            let Some(value_match) = captures.get(1) else {
                continue;
            };
            attr_spans.push((value_match.start(), value_match.end()));

            match normalize_src_value(value_match.as_str()) {
                Some(url) => push_reference(
                    url,
                    line_number,
                    SourceForm::MarkupAttr,
                    &mut seen,
                    &mut references,
                    stats,
                ),
                None => {
                    stats.increment_warning(WarningType::RelativeUrlSkipped);
                    debug!(
                        "Skipping relative src value on line {}: {}",
                        line_number,
                        value_match.as_str()
                    );
                }
            }
        }

        for url_match in BARE_URL_RE.find_iter(line) {
            let inside_attr = attr_spans
                .iter()
                .any(|(start, end)| url_match.start() >= *start && url_match.start() < *end);
            if inside_attr {
                continue;
            }

            push_reference(
                url_match.as_str().to_string(),
                line_number,
                SourceForm::BareUrl,
                &mut seen,
                &mut references,
                stats,
            );
        }
    }

    references
}

/// Normalizes a `src` attribute value into an absolute URL.
///
/// Protocol-relative values (`//host/path`) get an `https:` prefix;
/// absolute http/https values pass through. Anything else is a relative
/// reference and yields `None`.
fn normalize_src_value(value: &str) -> Option<String> {
    let value = value.trim();
    if value.starts_with("//") {
        return Some(format!("https:{}", value));
    }
    let lowered = value.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        return Some(value.to_string());
    }
    None
}

/// Dedup key: scheme and host lowercased, path and query as given,
/// fragment dropped. Unparseable URLs key on the lowercased raw token so
/// repeated malformed tokens also collapse.
fn normalized_key(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) if parsed.host_str().is_some() => {
            let mut key = format!(
                "{}://{}{}",
                parsed.scheme(),
                parsed.host_str().unwrap_or_default().to_ascii_lowercase(),
                parsed.path()
            );
            if let Some(query) = parsed.query() {
                key.push('?');
                key.push_str(query);
            }
            key
        }
        _ => url.trim().to_ascii_lowercase(),
    }
}

fn push_reference(
    url: String,
    line: usize,
    source: SourceForm,
    seen: &mut HashSet<String>,
    references: &mut Vec<ScriptReference>,
    stats: &mut ScanStats,
) {
    if url.len() > MAX_URL_LENGTH {
        let preview: String = url.chars().take(50).collect();
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            preview
        );
        return;
    }

    let key = normalized_key(&url);
    if !seen.insert(key) {
        stats.increment_info(InfoType::DuplicateSuppressed);
        debug!("Suppressed duplicate reference on line {}: {}", line, url);
        return;
    }

    let host = url::Url::parse(&url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.to_ascii_lowercase()));

    references.push(ScriptReference {
        url,
        line,
        host,
        source,
    });
}
