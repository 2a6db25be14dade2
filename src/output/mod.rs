//! Output module for rendering harvest results
//!
//! This module handles:
//! - Printing one display line per loaded entity
//! - Summarizing per-kind outcomes of a run
//! - Writing a markdown report

mod markdown;
pub mod summary;
mod text;

pub use markdown::{format_markdown_report, write_markdown_report};
pub use summary::{KindSummary, RunSummary};
pub use text::{format_entities, format_summary, print_results};
