//! Entity extraction from index pages
//!
//! This module turns the rows of the feat index table into `Feat` entities:
//! - Filtering header rows and rows of unrelated tables
//! - Reading the fixed three-column layout
//! - Classifying feat types from CSS class tokens
//! - Resolving the source book from the row's link, falling back to CSS classes
//!
//! Problems confined to one row or one token are logged and recorded as
//! diagnostics; they never abort the extraction.

mod classify;
mod feats;

pub use classify::{
    classify_source, classify_types, is_data_row, source_from_classes, SOURCE_CLASS_PREFIX,
    TECHNOLOGY_GUIDE_CODE, TYPE_CLASS_PREFIX,
};
pub use feats::{parse_feat_table, ExtractionStats, FeatExtractor, FeatTable};
