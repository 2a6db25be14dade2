use crate::labels::{self, Labelled};
use crate::model::{Entity, EntityCore, ModelError, Source};
use std::collections::BTreeSet;
use std::fmt;

/// Classification tags a feat can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatKind {
    Alignment,
    Combat,
    Critical,
    Esoteric,
    Grit,
    ItemCreation,
    Metamagic,
    Mythic,
    Panache,
    Performance,
    Stare,
    Story,
    Style,
    Teamwork,
}

impl FeatKind {
    pub const ALL: [FeatKind; 14] = [
        Self::Alignment,
        Self::Combat,
        Self::Critical,
        Self::Esoteric,
        Self::Grit,
        Self::ItemCreation,
        Self::Metamagic,
        Self::Mythic,
        Self::Panache,
        Self::Performance,
        Self::Stare,
        Self::Story,
        Self::Style,
        Self::Teamwork,
    ];

    /// Upper-snake identifier of the kind (e.g. `ITEM_CREATION`)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Alignment => "ALIGNMENT",
            Self::Combat => "COMBAT",
            Self::Critical => "CRITICAL",
            Self::Esoteric => "ESOTERIC",
            Self::Grit => "GRIT",
            Self::ItemCreation => "ITEM_CREATION",
            Self::Metamagic => "METAMAGIC",
            Self::Mythic => "MYTHIC",
            Self::Panache => "PANACHE",
            Self::Performance => "PERFORMANCE",
            Self::Stare => "STARE",
            Self::Story => "STORY",
            Self::Style => "STYLE",
            Self::Teamwork => "TEAMWORK",
        }
    }

    /// Parses the suffix of a markup type token (`item-creation`, `combat`)
    ///
    /// The token is trimmed, uppercased and hyphens become underscores before
    /// matching against the known keys. Returns None for unknown tokens.
    pub fn from_markup(token: &str) -> Option<Self> {
        let key = token.trim().to_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Localized display label
    pub fn label(&self) -> String {
        labels::translate(self, "feat.type")
    }
}

impl Labelled for FeatKind {
    fn label_key(&self) -> String {
        self.key().to_lowercase()
    }
}

impl fmt::Display for FeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A feat extracted from the feat index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feat {
    core: EntityCore,
    prerequisites: Option<String>,
    types: BTreeSet<FeatKind>,
}

impl Feat {
    /// Creates a feat
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyField` if the name or description is blank.
    pub fn new(
        name: impl Into<String>,
        prerequisites: Option<String>,
        description: impl Into<String>,
        types: impl IntoIterator<Item = FeatKind>,
        source: Option<Source>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            core: EntityCore::new(name, description, source)?,
            prerequisites,
            types: types.into_iter().collect(),
        })
    }

    /// Prerequisites as printed; an empty string means "none listed"
    pub fn prerequisites(&self) -> Option<&str> {
        self.prerequisites.as_deref()
    }

    /// Classification tags, possibly empty
    pub fn types(&self) -> &BTreeSet<FeatKind> {
        &self.types
    }

    pub fn has_type(&self, kind: FeatKind) -> bool {
        self.types.contains(&kind)
    }
}

impl Entity for Feat {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn description(&self) -> &str {
        self.core.description()
    }

    fn source(&self) -> Option<Source> {
        self.core.source()
    }
}

impl fmt::Display for Feat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
