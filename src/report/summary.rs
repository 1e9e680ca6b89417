//! The aggregate summary document.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::config::TOP_THIRD_PARTY_DOMAINS;
use crate::models::{Category, ClassifiedScript, PartyLabel};

use super::escape_cell;

/// Renders the summary document: totals, party split, category breakdown,
/// top third-party domains, and a fixed list of review talking points.
pub fn render_summary(scripts: &[ClassifiedScript], primary_domain: &str) -> String {
    let total = scripts.len();
    let first_party = scripts
        .iter()
        .filter(|script| script.party == PartyLabel::FirstParty)
        .count();
    let third_party = total - first_party;

    let mut lines: Vec<String> = Vec::new();
    lines.push("# Script Inventory Summary".to_string());
    lines.push(String::new());
    lines.push(format!("**Primary domain:** `{}`", primary_domain));
    lines.push(format!("**Total scripts detected:** {}", total));
    lines.push(format!("- First-party: {}", first_party));
    lines.push(format!("- Third-party: {}", third_party));
    lines.push(String::new());

    lines.push("## Category Breakdown".to_string());
    lines.push(String::new());
    let category_counts = count_categories(scripts);
    if category_counts.is_empty() {
        lines.push("_No scripts detected._".to_string());
    } else {
        lines.push("| Category | Count |".to_string());
        lines.push("|----------|-------|".to_string());
        for (category, count) in category_counts {
            lines.push(format!("| {} | {} |", category, count));
        }
    }
    lines.push(String::new());

    lines.push("## Top Third-Party Domains".to_string());
    lines.push(String::new());
    let top_domains = top_third_party_domains(scripts);
    if top_domains.is_empty() {
        lines.push("_No third-party script domains detected._".to_string());
    } else {
        lines.push("| Domain | Count |".to_string());
        lines.push("|--------|-------|".to_string());
        for (domain, count) in top_domains {
            lines.push(format!("| `{}` | {} |", escape_cell(&domain), count));
        }
    }
    lines.push(String::new());

    lines.push("## Suggested Talking Points".to_string());
    lines.push(String::new());
    lines.push(
        "- Review all **third-party analytics and tracking scripts** for data minimisation and consent."
            .to_string(),
    );
    lines.push(
        "- Consider **Subresource Integrity (SRI)** for CDN-hosted libraries where feasible."
            .to_string(),
    );
    lines.push(
        "- Tighten the **Content-Security-Policy (CSP)** `script-src` directive to only allow the domains listed here."
            .to_string(),
    );
    lines.push(
        "- Audit embedded **payment, social, and widget scripts** for unnecessary permissions and data access."
            .to_string(),
    );
    lines.push(
        "- Maintain this script inventory as part of **vendor and supply-chain security** documentation."
            .to_string(),
    );
    lines.push(String::new());

    lines.join("\n")
}

/// Nonzero category counts, descending, ties by category label.
fn count_categories(scripts: &[ClassifiedScript]) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Category::iter()
        .map(|category| {
            (
                category,
                scripts
                    .iter()
                    .filter(|script| script.category == category)
                    .count(),
            )
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));
    counts
}

/// Third-party hosts by frequency, descending; ties keep first-seen order.
/// Capped at [`TOP_THIRD_PARTY_DOMAINS`] rows.
fn top_third_party_domains(scripts: &[ClassifiedScript]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for script in scripts {
        if script.party != PartyLabel::ThirdParty {
            continue;
        }
        let Some(host) = script.reference.host.as_ref() else {
            continue;
        };
        if !counts.contains_key(host) {
            order.push(host.clone());
        }
        *counts.entry(host.clone()).or_insert(0) += 1;
    }

    let mut domains: Vec<(String, usize)> = order
        .into_iter()
        .map(|host| {
            let count = counts.get(&host).copied().unwrap_or(0);
            (host, count)
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts
    domains.sort_by(|a, b| b.1.cmp(&a.1));
    domains.truncate(TOP_THIRD_PARTY_DOMAINS);
    domains
}
