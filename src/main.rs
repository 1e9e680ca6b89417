//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `scriptmap` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use scriptmap::initialization::init_logger_with;
use scriptmap::{run_inventory, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the inventory pass using the library
    match run_inventory(config) {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Classified {} script{} ({} first-party, {} third-party) in {:.1}s",
                report.total_scripts,
                if report.total_scripts == 1 { "" } else { "s" },
                report.first_party,
                report.third_party,
                report.elapsed_seconds
            );
            println!("Inventory report: {}", report.inventory_path.display());
            println!("Summary report:   {}", report.summary_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("scriptmap error: {:#}", e);
            process::exit(1);
        }
    }
}
