//! Entity model for extracted rules data
//!
//! Entities are immutable once built: the extractor constructs each one
//! exactly once from a table row and nothing mutates it afterwards.
//!
//! # Components
//!
//! - `Entity`: common read-only view (name, description, optional source)
//! - `Source`: closed catalog of source books
//! - `Feat`/`FeatKind`: feats and their classification tags

mod entity;
mod feat;
mod source;

pub use entity::{Entity, EntityCore, ModelError};
pub use feat::{Feat, FeatKind};
pub use source::{Source, SourceInfo};
