//! Markdown report generation.
//!
//! Thin rendering layer over the classified script list: templated string
//! formatting and two file writes at the end of the run. No decisions are
//! made here beyond presentation.

mod inventory;
mod summary;

pub use inventory::render_inventory;
pub use summary::render_summary;

use std::fs;
use std::path::PathBuf;

use log::info;

use crate::error_handling::ReportError;
use crate::models::ClassifiedScript;

/// Paths of the written report files.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// The per-script inventory table.
    pub inventory: PathBuf,
    /// The aggregate summary.
    pub summary: PathBuf,
}

/// Escapes a Markdown table cell so embedded pipes cannot break the row.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Renders and writes both reports.
///
/// Output files are `<prefix>_inventory.md` and `<prefix>_summary.md`; a
/// trailing `.md` on the prefix is tolerated and stripped.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if either file cannot be written; the
/// caller is expected to abort the run.
pub fn write_reports(
    scripts: &[ClassifiedScript],
    primary_domain: &str,
    output_prefix: &str,
) -> Result<ReportPaths, ReportError> {
    let base = output_prefix.trim_end_matches(".md");
    let inventory_path = PathBuf::from(format!("{}_inventory.md", base));
    let summary_path = PathBuf::from(format!("{}_summary.md", base));

    let inventory_md = render_inventory(scripts);
    fs::write(&inventory_path, inventory_md).map_err(|source| ReportError::Write {
        path: inventory_path.clone(),
        source,
    })?;
    info!("Wrote inventory report to {}", inventory_path.display());

    let summary_md = render_summary(scripts, primary_domain);
    fs::write(&summary_path, summary_md).map_err(|source| ReportError::Write {
        path: summary_path.clone(),
        source,
    })?;
    info!("Wrote summary report to {}", summary_path.display());

    Ok(ReportPaths {
        inventory: inventory_path,
        summary: summary_path,
    })
}
