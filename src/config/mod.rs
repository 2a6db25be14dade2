//! Configuration module for PRD-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file section falls back to the defaults
//! that point at the public Paizo PRD.
//!
//! # Example
//!
//! ```no_run
//! use prd_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("prd-harvest.toml")).unwrap();
//! println!("Fetching from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, LoaderConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
