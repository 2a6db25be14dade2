//! PRD-Harvest: structured rules data from the Pathfinder Reference Document
//!
//! This crate fetches pages of the hosted reference document, discovers the
//! catalog of source books, and extracts feats (with prerequisites, type tags
//! and source attribution) from the feat index table.

pub mod catalog;
pub mod config;
pub mod extract;
pub mod fetcher;
pub mod labels;
pub mod loader;
pub mod model;
pub mod output;
pub mod rules;

use thiserror::Error;

/// Main error type for PRD-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Request for {url} was cancelled")]
    Cancelled { url: String },

    #[error("HTML parse error for {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Malformed row #{row}: {message}")]
    MalformedRow { row: usize, message: String },

    #[error("Unknown source for '{reference}' (key {key})")]
    UnknownSource { reference: String, key: String },

    #[error("Unknown feat type token: {0}")]
    UnknownKindToken(String),

    #[error("Invalid entity: {0}")]
    Model(#[from] model::ModelError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Loader '{kind}' panicked: {message}")]
    LoaderPanicked { kind: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarvestError {
    /// Returns true if the failed operation may succeed when tried again
    ///
    /// Transport failures and cancellations are retryable; everything else
    /// describes content that will not change on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Cancelled { .. })
    }

    /// Returns true if this error only affects a single row or token
    pub fn is_row_local(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. } | Self::UnknownSource { .. } | Self::UnknownKindToken(_)
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for PRD-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::BookCatalog;
pub use config::Config;
pub use extract::FeatExtractor;
pub use fetcher::{CancelHandle, CancelSignal, Fetcher, ParsedDocument};
pub use loader::{EntityKind, Loader, LoaderRegistry};
pub use model::{Entity, Feat, FeatKind, Source};
