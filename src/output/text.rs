//! Plain-text rendering of run results

use crate::loader::RunResults;
use crate::output::summary::RunSummary;

/// Formats every loaded entity, one display string per line
///
/// Kinds are listed in order; within a kind, entities keep the order the
/// loader produced them in. Failed kinds contribute no lines.
pub fn format_entities(results: &RunResults) -> String {
    let mut out = String::new();
    for entities in results.values().filter_map(|r| r.as_ref().ok()) {
        for entity in entities {
            out.push_str(&entity.display_name());
            out.push('\n');
        }
    }
    out
}

/// Formats the per-kind outcome of a run
pub fn format_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str("=== Harvest Summary ===\n\n");

    for kind in &summary.kinds {
        match &kind.error {
            None => out.push_str(&format!(
                "{:<10} {:>6} entities\n",
                kind.kind, kind.entity_count
            )),
            Some(error) => out.push_str(&format!("{:<10} FAILED: {}\n", kind.kind, error)),
        }
    }

    out.push_str(&format!(
        "\nTotal: {} entities, {} of {} loaders failed ({:.2}s)\n",
        summary.total_entities(),
        summary.failed_kinds(),
        summary.kinds.len(),
        summary.duration_seconds()
    ));
    out
}

/// Prints entities to stdout and the summary to stderr
pub fn print_results(results: &RunResults, summary: &RunSummary) {
    print!("{}", format_entities(results));
    eprint!("{}", format_summary(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::summary::tests::sample_results;
    use chrono::Utc;

    #[test]
    fn test_one_line_per_entity() {
        let text = format_entities(&sample_results());
        assert_eq!(
            text,
            "Dodge (Pathfinder Core Rulebook)\nMobility (Pathfinder Core Rulebook)\nHouse Rule\n"
        );
    }

    #[test]
    fn test_summary_lists_failures() {
        let summary = RunSummary::from_results(&sample_results(), "http://paizo.com/", Utc::now());
        let text = format_summary(&summary);

        assert!(text.contains("feat"));
        assert!(text.contains("3 entities"));
        assert!(text.contains("spell      FAILED: Network error"));
        assert!(text.contains("1 of 2 loaders failed"));
    }
}
