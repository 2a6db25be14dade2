//! Markdown report generation
//!
//! This module generates a human-readable markdown report of a run,
//! including per-kind entity counts, source breakdowns, and loader failures.

use crate::loader::RunResults;
use crate::output::summary::RunSummary;
use crate::HarvestError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Maximum number of entity names listed per kind
const MAX_LISTED_ENTITIES: usize = 50;

/// Writes a markdown report of a run to `output_path`
///
/// # Arguments
///
/// * `summary` - The run summary
/// * `results` - The registry results the summary was built from
/// * `output_path` - Path where the markdown file should be written
pub fn write_markdown_report(
    summary: &RunSummary,
    results: &RunResults,
    output_path: &Path,
) -> Result<(), HarvestError> {
    let markdown = format_markdown_report(summary, results);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    tracing::info!("Wrote markdown report to {}", output_path.display());
    Ok(())
}

/// Formats a run as markdown
pub fn format_markdown_report(summary: &RunSummary, results: &RunResults) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# PRD Harvest Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Source**: {}\n", summary.base_url));
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n",
        summary.duration_seconds()
    ));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Per-kind outcome
    md.push_str("## Loaders\n\n");
    md.push_str("| Kind | Entities | Status |\n");
    md.push_str("|------|----------|--------|\n");
    for kind in &summary.kinds {
        let status = if kind.succeeded() { "ok" } else { "failed" };
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            kind.kind, kind.entity_count, status
        ));
    }
    md.push_str(&format!(
        "\n- **Total Entities**: {}\n- **Success Rate**: {:.2}%\n\n",
        summary.total_entities(),
        summary.success_rate()
    ));

    // Source breakdown per kind
    for kind in summary.kinds.iter().filter(|k| !k.by_source.is_empty()) {
        md.push_str(&format!("## Sources: {}\n\n", kind.kind));
        md.push_str("| Source | Count |\n");
        md.push_str("|--------|-------|\n");
        for (source, count) in &kind.by_source {
            md.push_str(&format!("| {} | {} |\n", source, count));
        }
        md.push('\n');
    }

    // Entity listing
    for (kind, entities) in results.iter().filter_map(|(k, r)| Some((k, r.as_ref().ok()?))) {
        if entities.is_empty() {
            continue;
        }
        md.push_str(&format!("## Entities: {}\n\n", kind));
        for entity in entities.iter().take(MAX_LISTED_ENTITIES) {
            md.push_str(&format!("- {}\n", entity.display_name()));
        }
        if entities.len() > MAX_LISTED_ENTITIES {
            md.push_str(&format!(
                "\n... and {} more\n",
                entities.len() - MAX_LISTED_ENTITIES
            ));
        }
        md.push('\n');
    }

    // Failures
    let failures: Vec<_> = summary
        .kinds
        .iter()
        .filter_map(|k| Some((k.kind, k.error.as_ref()?)))
        .collect();
    if !failures.is_empty() {
        md.push_str("## Errors\n\n");
        for (kind, error) in failures {
            md.push_str(&format!("- **{}**: {}\n", kind, error));
        }
        md.push('\n');
    }

    md
}
