use crate::labels::{self, Labelled};
use crate::rules::RulesError;
use std::fmt;

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Full name, e.g. "Strength"
    pub fn name(&self) -> String {
        labels::translate(self, "attribute")
    }

    /// Three-letter abbreviation, e.g. "Str"
    pub fn abbreviation(&self) -> String {
        let key = format!("attribute.{}.abbreviation", self.label_key());
        labels::text(&key).map(str::to_string).unwrap_or(key)
    }

    /// Ability modifier for a score: `floor((score - 10) / 2)`
    ///
    /// # Errors
    ///
    /// Returns `RulesError::NegativeAttributeScore` for scores below zero.
    pub fn calculate_bonus(score: i32) -> Result<i32, RulesError> {
        if score < 0 {
            return Err(RulesError::NegativeAttributeScore(score));
        }
        Ok((score - 10).div_euclid(2))
    }
}

impl Labelled for Attribute {
    fn label_key(&self) -> String {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
        .to_string()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
