//! Loader registry
//!
//! A loader knows how to produce every entity of one kind (feats, and
//! whatever kinds are added later). The registry runs all registered
//! loaders and reports a result per kind: one loader failing never
//! prevents the others from completing.

mod registry;

pub use registry::{LoaderRegistry, RunResults};

use crate::model::Entity;
use crate::HarvestError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Entities produced by one loader, in document order
pub type EntityList = Vec<Arc<dyn Entity>>;

/// Identifies the kind of entity a loader produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKind(&'static str);

impl EntityKind {
    pub const FEAT: EntityKind = EntityKind("feat");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

/// Produces all entities of a single kind
#[async_trait]
pub trait Loader: Send + Sync {
    /// The kind of entity this loader produces
    fn kind(&self) -> EntityKind;

    /// Prepares shared state before loading
    ///
    /// Must be safe to call more than once.
    async fn initialize(&self) -> Result<(), HarvestError> {
        Ok(())
    }

    /// Loads every entity of this kind
    async fn load(&self) -> Result<EntityList, HarvestError>;
}
