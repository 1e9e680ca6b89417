//! The built-in category rule table.
//!
//! An ordered list of immutable rule records, compiled into the binary and
//! loaded once per run. Rules are evaluated in three tiers: exact host,
//! then host suffix, then keyword substring. Host-based tiers always
//! outrank keyword matches, so explicit domain knowledge wins over
//! heuristic text matching.

use crate::models::Category;

/// How a rule pattern is matched against a script URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Pattern must equal the host exactly.
    ExactHost,
    /// Pattern must equal the host or be a dot-separated suffix of it.
    HostSuffix,
    /// Pattern must appear as a substring of the lowercased URL.
    Keyword,
}

/// One entry of the category rule table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// The domain or keyword pattern.
    pub pattern: &'static str,
    /// How the pattern is matched.
    pub kind: PatternKind,
    /// Category assigned when the pattern matches.
    pub category: Category,
}

const fn rule(pattern: &'static str, kind: PatternKind, category: Category) -> CategoryRule {
    CategoryRule {
        pattern,
        kind,
        category,
    }
}

/// The built-in rule table, ordered within each tier.
static DEFAULT_RULES: &[CategoryRule] = &[
    // Exact hosts: unambiguous vendor endpoints
    rule("analytics.google.com", PatternKind::ExactHost, Category::Analytics),
    rule("adservice.google.com", PatternKind::ExactHost, Category::Ads),
    rule("ajax.googleapis.com", PatternKind::ExactHost, Category::CdnLibrary),
    rule("code.jquery.com", PatternKind::ExactHost, Category::CdnLibrary),
    rule("cdnjs.cloudflare.com", PatternKind::ExactHost, Category::CdnLibrary),
    rule("js.stripe.com", PatternKind::ExactHost, Category::Payment),
    rule("connect.facebook.net", PatternKind::ExactHost, Category::Social),
    rule("platform.twitter.com", PatternKind::ExactHost, Category::Social),
    rule("maps.googleapis.com", PatternKind::ExactHost, Category::Maps),
    // Host suffixes: vendor domains incl. their subdomains
    rule("google-analytics.com", PatternKind::HostSuffix, Category::Analytics),
    rule("googletagmanager.com", PatternKind::HostSuffix, Category::Analytics),
    rule("segment.io", PatternKind::HostSuffix, Category::Analytics),
    rule("mixpanel.com", PatternKind::HostSuffix, Category::Analytics),
    rule("plausible.io", PatternKind::HostSuffix, Category::Analytics),
    rule("doubleclick.net", PatternKind::HostSuffix, Category::Ads),
    rule("googlesyndication.com", PatternKind::HostSuffix, Category::Ads),
    rule("adnxs.com", PatternKind::HostSuffix, Category::Ads),
    rule("jsdelivr.net", PatternKind::HostSuffix, Category::CdnLibrary),
    rule("unpkg.com", PatternKind::HostSuffix, Category::CdnLibrary),
    rule("cloudflare.com", PatternKind::HostSuffix, Category::CdnLibrary),
    rule("stripe.com", PatternKind::HostSuffix, Category::Payment),
    rule("paypalobjects.com", PatternKind::HostSuffix, Category::Payment),
    rule("braintreepayments.com", PatternKind::HostSuffix, Category::Payment),
    rule("facebook.com", PatternKind::HostSuffix, Category::Social),
    rule("linkedin.com", PatternKind::HostSuffix, Category::Social),
    rule("sentry.io", PatternKind::HostSuffix, Category::Monitoring),
    rule("datadoghq.com", PatternKind::HostSuffix, Category::Monitoring),
    rule("newrelic.com", PatternKind::HostSuffix, Category::Monitoring),
    rule("mapbox.com", PatternKind::HostSuffix, Category::Maps),
    // Keywords: low-confidence substring heuristics over the full URL
    rule("gtag/js", PatternKind::Keyword, Category::Analytics),
    rule("gtm", PatternKind::Keyword, Category::Analytics),
    rule("analytics", PatternKind::Keyword, Category::Analytics),
    rule("matomo", PatternKind::Keyword, Category::Analytics),
    rule("snowplow", PatternKind::Keyword, Category::Analytics),
    rule("/ads/", PatternKind::Keyword, Category::Ads),
    rule("adsystem", PatternKind::Keyword, Category::Ads),
    rule("taboola", PatternKind::Keyword, Category::Ads),
    rule("outbrain", PatternKind::Keyword, Category::Ads),
    rule("cdn.", PatternKind::Keyword, Category::CdnLibrary),
    rule("static.", PatternKind::Keyword, Category::CdnLibrary),
    rule("bootstrap", PatternKind::Keyword, Category::CdnLibrary),
    rule("checkout.", PatternKind::Keyword, Category::Payment),
    rule("twitter.com/widgets", PatternKind::Keyword, Category::Social),
    rule("snap.", PatternKind::Keyword, Category::Social),
    rule("bugsnag", PatternKind::Keyword, Category::Monitoring),
    rule("rollbar", PatternKind::Keyword, Category::Monitoring),
    rule("logrocket", PatternKind::Keyword, Category::Monitoring),
    rule("leaflet", PatternKind::Keyword, Category::Maps),
    rule("openstreetmap", PatternKind::Keyword, Category::Maps),
];

/// Returns the built-in rule table.
pub fn default_rules() -> &'static [CategoryRule] {
    DEFAULT_RULES
}
