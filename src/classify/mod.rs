//! Script classification.
//!
//! Turns every extracted [`ScriptReference`] into exactly one
//! [`ClassifiedScript`]: registrable domain, category from the rule table,
//! and first-/third-party status relative to the primary domain.
//! Classification is deterministic and total; it never fails the run, and
//! anything the rule table does not recognize falls back to
//! [`Category::Generic`].

mod rules;

pub use rules::{default_rules, CategoryRule, PatternKind};

use crate::error_handling::{InfoType, ScanStats, WarningType};
use crate::models::{Category, ClassifiedScript, PartyLabel, ScriptReference};

/// Decides whether `host` belongs to the primary domain.
///
/// True iff the host equals the primary domain or is a subdomain of it
/// (dot-boundary suffix match). `example.com.evil.net` is not a subdomain
/// of `example.com`. Pure function of its two arguments.
pub fn is_first_party(host: &str, primary_domain: &str) -> bool {
    if host.is_empty() || primary_domain.is_empty() {
        return false;
    }
    let host = host.to_ascii_lowercase();
    let primary = primary_domain.to_ascii_lowercase();
    let primary = primary.trim_start_matches('.');

    host == primary || host.ends_with(&format!(".{}", primary))
}

/// Classifies one extracted reference.
///
/// Never fails: a reference without a parseable host is classified
/// `Generic`/third-party with a note, and anything unmatched by the rule
/// table is `Generic`. Keyword-tier matches get a note flagging them for
/// manual review.
pub fn classify_reference(
    list: &psl::List,
    reference: ScriptReference,
    primary_domain: &str,
    rules: &[CategoryRule],
    stats: &mut ScanStats,
) -> ClassifiedScript {
    let mut notes = Vec::new();

    let Some(host) = reference.host.clone() else {
        stats.increment_warning(WarningType::MalformedUrl);
        notes.push("No host component detected".to_string());
        return ClassifiedScript {
            reference,
            registrable_domain: None,
            category: Category::Generic,
            party: PartyLabel::ThirdParty,
            matched_pattern: None,
            notes,
        };
    };

    let registrable_domain = crate::domain::registrable_host(list, &host);

    let party = if is_first_party(&host, primary_domain) {
        PartyLabel::FirstParty
    } else {
        PartyLabel::ThirdParty
    };

    let haystack = reference.url.to_ascii_lowercase();
    let (category, matched_pattern) = match match_category(&host, &haystack, rules) {
        Some(rule) => {
            if rule.kind == PatternKind::Keyword {
                stats.increment_info(InfoType::KeywordMatch);
                notes.push(format!(
                    "Keyword match on `{}`; verify vendor manually",
                    rule.pattern
                ));
            }
            (rule.category, Some(rule.pattern.to_string()))
        }
        None => {
            notes.extend(generic_heuristics(&haystack));
            (Category::Generic, None)
        }
    };

    ClassifiedScript {
        reference,
        registrable_domain,
        category,
        party,
        matched_pattern,
        notes,
    }
}

/// Finds the first matching rule, evaluating tiers in fixed priority
/// order: exact host, host suffix, then keyword.
fn match_category<'r>(
    host: &str,
    haystack: &str,
    rules: &'r [CategoryRule],
) -> Option<&'r CategoryRule> {
    for kind in [
        PatternKind::ExactHost,
        PatternKind::HostSuffix,
        PatternKind::Keyword,
    ] {
        for rule in rules.iter().filter(|rule| rule.kind == kind) {
            let hit = match kind {
                PatternKind::ExactHost => host == rule.pattern,
                PatternKind::HostSuffix => host_matches_suffix(host, rule.pattern),
                PatternKind::Keyword => haystack.contains(rule.pattern),
            };
            if hit {
                return Some(rule);
            }
        }
    }
    None
}

/// Dot-boundary suffix match, so `evilstripe.com` does not match a
/// `stripe.com` rule.
fn host_matches_suffix(host: &str, pattern: &str) -> bool {
    host == pattern || host.ends_with(&format!(".{}", pattern))
}

/// Advisory notes for scripts the rule table does not recognize.
/// These flag shapes worth a manual look during review.
fn generic_heuristics(haystack: &str) -> Vec<String> {
    let mut notes = Vec::new();
    if haystack.contains("widget") {
        notes.push("Widget-style script (embedded component)".to_string());
    }
    if haystack.contains("track") {
        notes.push("Tracking-related identifier in URL".to_string());
    }
    if haystack.contains("bundle") || haystack.contains("vendor") {
        notes.push("Large JS bundle; may include multiple libraries".to_string());
    }
    notes
}
