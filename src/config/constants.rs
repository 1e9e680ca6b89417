//! Configuration constants.

/// Maximum URL length (2048 characters). Extracted tokens longer than this
/// are skipped with a warning; this matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum number of rows in the summary's top third-party domains table.
pub const TOP_THIRD_PARTY_DOMAINS: usize = 20;

/// Default prefix for the generated report files.
pub const DEFAULT_OUTPUT_PREFIX: &str = "scriptmap";
