use crate::model::Source;
use std::fmt;
use thiserror::Error;

/// Errors raised when an entity would violate its invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

/// Read-only view shared by every extracted rules entity
pub trait Entity: fmt::Debug + Send + Sync {
    /// Entity name as printed in the reference document
    fn name(&self) -> &str;

    /// Short description
    fn description(&self) -> &str;

    /// Book the entity was published in, if it could be determined
    fn source(&self) -> Option<Source>;

    /// Display form: `"{name} ({source display name})"`, or just the name
    fn display_name(&self) -> String {
        match self.source() {
            Some(source) => format!("{} ({})", self.name(), source.display_name()),
            None => self.name().to_string(),
        }
    }
}

/// Fields common to all entities, validated once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCore {
    name: String,
    description: String,
    source: Option<Source>,
}

impl EntityCore {
    /// Builds the common part of an entity
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyField` if the name or description is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: Option<Source>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(ModelError::EmptyField("name"));
        }
        if description.trim().is_empty() {
            return Err(ModelError::EmptyField("description"));
        }

        Ok(Self {
            name,
            description,
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source(&self) -> Option<Source> {
        self.source
    }
}
