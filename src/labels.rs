//! Display-string lookup for rules values
//!
//! Labels come from a TOML bundle compiled into the binary. The bundle is
//! parsed once, on first use, and is read-only afterwards. Labels are only
//! ever used for display; nothing branches on their content.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const RULES_BUNDLE: &str = include_str!("../resources/labels.toml");

static BUNDLE: OnceLock<LabelBundle> = OnceLock::new();

/// A value that can be looked up in the label bundle
pub trait Labelled {
    /// Lowercase identifier appended to the category prefix
    fn label_key(&self) -> String;
}

#[derive(Debug, Deserialize)]
struct BundleFile {
    #[serde(default)]
    labels: HashMap<String, String>,
}

/// Parsed set of display labels
#[derive(Debug, Default)]
pub struct LabelBundle {
    entries: HashMap<String, String>,
}

impl LabelBundle {
    /// Parses a bundle from TOML text with a `[labels]` table
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        let file: BundleFile = toml::from_str(text)?;
        Ok(Self {
            entries: file.labels,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the built-in bundle, parsing it on first use
pub fn bundle() -> &'static LabelBundle {
    BUNDLE.get_or_init(|| {
        LabelBundle::from_toml(RULES_BUNDLE).unwrap_or_else(|e| {
            tracing::error!("Built-in label bundle is invalid: {}", e);
            LabelBundle::default()
        })
    })
}

/// Looks up a label by its full key
pub fn text(key: &str) -> Option<&'static str> {
    bundle().get(key)
}

/// Returns the label for `"{prefix}.{value}"`
///
/// A missing label is logged and the key itself is returned, so display
/// code never fails on an incomplete bundle.
pub fn translate<T: Labelled + ?Sized>(value: &T, prefix: &str) -> String {
    let key = format!("{}.{}", prefix, value.label_key());
    match text(&key) {
        Some(label) => label.to_string(),
        None => {
            tracing::warn!("Missing display label for {}", key);
            key
        }
    }
}

/// Formats a bonus with an explicit sign (`+1`, `+0`, `-1`)
pub fn format_bonus(bonus: i32) -> String {
    format!("{:+}", bonus)
}
