//! Run summary
//!
//! Condenses the per-kind results of a registry run into counts that the
//! text and markdown renderers share.

use crate::loader::{EntityKind, RunResults};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Label used for entities without a known source book
pub const UNKNOWN_SOURCE: &str = "Unknown source";

/// Outcome of one loader
#[derive(Debug, Clone)]
pub struct KindSummary {
    pub kind: EntityKind,

    /// Entities produced (0 when the loader failed)
    pub entity_count: usize,

    /// Error message if the loader failed
    pub error: Option<String>,

    /// Entity count per source book display name
    pub by_source: BTreeMap<String, usize>,
}

impl KindSummary {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary statistics for a run
#[derive(Debug, Clone)]
pub struct RunSummary {
    // Run metadata
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub base_url: String,
    pub config_hash: Option<String>,

    // Per-kind outcomes, ordered by kind
    pub kinds: Vec<KindSummary>,
}

impl RunSummary {
    /// Builds a summary from registry results
    pub fn from_results(
        results: &RunResults,
        base_url: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let kinds = results
            .iter()
            .map(|(kind, result)| match result {
                Ok(entities) => {
                    let mut by_source = BTreeMap::new();
                    for entity in entities {
                        let source = entity
                            .source()
                            .map(|s| s.display_name().to_string())
                            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());
                        *by_source.entry(source).or_insert(0) += 1;
                    }
                    KindSummary {
                        kind: *kind,
                        entity_count: entities.len(),
                        error: None,
                        by_source,
                    }
                }
                Err(e) => KindSummary {
                    kind: *kind,
                    entity_count: 0,
                    error: Some(e.to_string()),
                    by_source: BTreeMap::new(),
                },
            })
            .collect();

        Self {
            started_at,
            finished_at: Utc::now(),
            base_url: base_url.into(),
            config_hash: None,
            kinds,
        }
    }

    /// Attaches the configuration fingerprint
    pub fn with_config_hash(mut self, hash: impl Into<String>) -> Self {
        self.config_hash = Some(hash.into());
        self
    }

    pub fn total_entities(&self) -> usize {
        self.kinds.iter().map(|k| k.entity_count).sum()
    }

    pub fn failed_kinds(&self) -> usize {
        self.kinds.iter().filter(|k| !k.succeeded()).count()
    }

    /// Returns the share of loaders that succeeded as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.kinds.is_empty() {
            return 0.0;
        }
        let succeeded = self.kinds.len() - self.failed_kinds();
        (succeeded as f64 / self.kinds.len() as f64) * 100.0
    }

    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}
