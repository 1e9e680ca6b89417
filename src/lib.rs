//! scriptmap library: JavaScript dependency inventory and classification
//!
//! This library scans a text corpus (bare script URLs and/or markup lines)
//! for JavaScript references, classifies each by vendor category, labels it
//! first- or third-party relative to a primary domain, and writes two
//! Markdown reports for security review.
//!
//! # Example
//!
//! ```no_run
//! use scriptmap::{Config, run_inventory};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("scripts.txt"),
//!     primary_domain: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_inventory(config)?;
//! println!("Classified {} scripts: {} first-party, {} third-party",
//!          report.total_scripts, report.first_party, report.third_party);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classify;
pub mod config;
mod domain;
mod error_handling;
mod extract;
pub mod initialization;
mod models;
mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::{Category, ClassifiedScript, PartyLabel, ScriptReference, SourceForm};
pub use run::{run_inventory, InventoryReport};

// Internal run module (contains the main pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};
    use std::path::PathBuf;
    use strum::IntoEnumIterator;

    use crate::classify::{classify_reference, default_rules};
    use crate::config::Config;
    use crate::domain::{normalize_primary_domain, registrable_host};
    use crate::error_handling::ScanStats;
    use crate::extract::extract_references;
    use crate::initialization::init_extractor;
    use crate::models::{Category, ClassifiedScript, PartyLabel};
    use crate::report::write_reports;

    /// Results of an inventory run.
    ///
    /// Contains summary statistics and the locations of the written reports.
    #[derive(Debug, Clone)]
    pub struct InventoryReport {
        /// Number of unique script references classified
        pub total_scripts: usize,
        /// Number of scripts on the primary domain or a subdomain of it
        pub first_party: usize,
        /// Number of scripts outside the primary domain
        pub third_party: usize,
        /// Nonzero per-category counts
        pub category_counts: Vec<(Category, usize)>,
        /// Path of the written inventory document
        pub inventory_path: PathBuf,
        /// Path of the written summary document
        pub summary_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full inventory pass with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads the input
    /// text, extracts unique script references, classifies each one, and
    /// writes the inventory and summary reports.
    ///
    /// The pass is a single synchronous sweep: per-item anomalies
    /// (malformed URLs, relative references) never abort it, only input
    /// and output I/O can.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The primary domain is empty after normalization
    /// - The input file cannot be read
    /// - Either report file cannot be written
    pub fn run_inventory(config: Config) -> Result<InventoryReport> {
        let start_time = std::time::Instant::now();

        let primary_domain = normalize_primary_domain(&config.primary_domain)
            .context("Invalid --primary-domain value")?;

        let extractor = init_extractor();
        if registrable_host(&extractor, &primary_domain).as_deref()
            != Some(primary_domain.as_str())
        {
            warn!(
                "Primary domain '{}' is not itself a registrable domain; party labels use it as given",
                primary_domain
            );
        }

        let text = std::fs::read_to_string(&config.input)
            .with_context(|| format!("Failed to read input file {}", config.input.display()))?;

        info!(
            "Scanning {} for script references (primary domain: {})",
            config.input.display(),
            primary_domain
        );

        let mut stats = ScanStats::new();
        let references = extract_references(&text, &mut stats);
        info!(
            "Extracted {} unique script reference{}",
            references.len(),
            if references.len() == 1 { "" } else { "s" }
        );

        let rules = default_rules();
        let classified: Vec<ClassifiedScript> = references
            .into_iter()
            .map(|reference| {
                classify_reference(&extractor, reference, &primary_domain, rules, &mut stats)
            })
            .collect();

        let paths = write_reports(&classified, &primary_domain, &config.output_prefix)?;

        stats.log_summary();

        let total_scripts = classified.len();
        let first_party = classified
            .iter()
            .filter(|script| script.party == PartyLabel::FirstParty)
            .count();
        let category_counts: Vec<(Category, usize)> = Category::iter()
            .map(|category| {
                (
                    category,
                    classified
                        .iter()
                        .filter(|script| script.category == category)
                        .count(),
                )
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        Ok(InventoryReport {
            total_scripts,
            first_party,
            third_party: total_scripts - first_party,
            category_counts,
            inventory_path: paths.inventory,
            summary_path: paths.summary,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
