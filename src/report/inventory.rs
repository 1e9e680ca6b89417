//! The per-script inventory table.

use crate::models::ClassifiedScript;

use super::escape_cell;

/// Renders the inventory document: one table row per classified script,
/// with columns URL, Host, Category, Party, Notes.
pub fn render_inventory(scripts: &[ClassifiedScript]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("# Script Inventory".to_string());
    lines.push(String::new());

    if scripts.is_empty() {
        lines.push("_No script URLs found in input._".to_string());
        return lines.join("\n");
    }

    lines.push("| URL | Host | Category | First/Third Party | Notes |".to_string());
    lines.push("|-----|------|----------|-------------------|-------|".to_string());

    for script in scripts {
        let notes = script.notes.join("; ");
        lines.push(format!(
            "| `{}` | `{}` | {} | {} | {} |",
            escape_cell(&script.reference.url),
            escape_cell(script.host_label()),
            escape_cell(&script.category.to_string()),
            script.party,
            escape_cell(&notes)
        ));
    }

    lines.join("\n")
}
