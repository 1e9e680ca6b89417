//! Core data types for script inventory and classification.
//!
//! All values here are immutable once produced: the extractor builds
//! `ScriptReference`s, the classifier turns each into exactly one
//! `ClassifiedScript`, and the report renderer only reads them.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Where a script reference was found in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceForm {
    /// A standalone absolute URL appearing anywhere in a line.
    BareUrl,
    /// The quoted `src` attribute value of a `<script>` tag.
    MarkupAttr,
}

/// A single script URL extracted from the input text.
///
/// References are deduplicated by normalized URL (scheme and host
/// case-insensitive, fragment ignored); the first occurrence fixes the
/// line number and source form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReference {
    /// The URL as extracted (protocol-relative values get an `https:` prefix).
    pub url: String,
    /// 1-based line number of the first occurrence.
    pub line: usize,
    /// Lowercased host, or `None` when the URL has no parseable host.
    pub host: Option<String>,
    /// Surface form the reference was extracted from.
    pub source: SourceForm,
}

/// Functional category assigned to a script.
///
/// The taxonomy is fixed; anything the rule table does not recognize is
/// `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum Category {
    /// Analytics and tag-management scripts.
    #[strum(serialize = "analytics")]
    Analytics,
    /// Advertising and ad-delivery scripts.
    #[strum(serialize = "ads")]
    Ads,
    /// CDN-hosted libraries and frameworks.
    #[strum(serialize = "cdn/library")]
    CdnLibrary,
    /// Payment provider scripts.
    #[strum(serialize = "payment")]
    Payment,
    /// Social platform embeds and widgets.
    #[strum(serialize = "social")]
    Social,
    /// Error tracking and performance monitoring.
    #[strum(serialize = "monitoring")]
    Monitoring,
    /// Mapping and geolocation scripts.
    #[strum(serialize = "maps")]
    Maps,
    /// Everything the rule table does not recognize.
    #[strum(serialize = "generic")]
    Generic,
}

/// Ownership label relative to the primary domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum PartyLabel {
    /// Host equals the primary domain or is a subdomain of it.
    #[strum(serialize = "First-party")]
    FirstParty,
    /// Any host outside the primary domain, including unparseable URLs.
    #[strum(serialize = "Third-party")]
    ThirdParty,
}

/// A classified script: the extracted reference plus everything the
/// report needs about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedScript {
    /// The underlying extracted reference.
    pub reference: ScriptReference,
    /// Registrable domain of the host, or `None` for IPs and unparseable URLs.
    pub registrable_domain: Option<String>,
    /// Assigned category; always exactly one.
    pub category: Category,
    /// First- or third-party relative to the primary domain.
    pub party: PartyLabel,
    /// The rule pattern that fired, when a non-generic rule matched.
    pub matched_pattern: Option<String>,
    /// Review notes: malformed-URL flags, keyword-match flags, and
    /// advisory heuristics on generic scripts.
    pub notes: Vec<String>,
}

impl ClassifiedScript {
    /// Host for display purposes; `(no host)` when the URL had none.
    pub fn host_label(&self) -> &str {
        self.reference.host.as_deref().unwrap_or("(no host)")
    }
}
