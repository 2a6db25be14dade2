use crate::labels::format_bonus;
use crate::rules::{Attribute, BonusType};
use std::fmt;

/// Where an armor class modifier comes from
///
/// Attribute modifiers order before typed bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModifierSource {
    Attribute(Attribute),
    Bonus(BonusType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub source: ModifierSource,
    pub value: i32,
}

/// Armor class as a base of 10 plus modifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmorClass {
    // sorted by source
    modifiers: Vec<Modifier>,
}

impl ArmorClass {
    pub const BASE: i32 = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> i32 {
        Self::BASE + self.modifiers.iter().map(|m| m.value).sum::<i32>()
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Sets the bonus of the given type, adding it if absent
    ///
    /// Stacking types (dodge) always add a new modifier.
    pub fn update_bonus(&mut self, bonus: BonusType, value: i32) {
        let source = ModifierSource::Bonus(bonus);
        if !bonus.stacks() && self.replace(source, value) {
            return;
        }
        self.insert(Modifier { source, value });
    }

    /// Sets the modifier derived from an attribute, adding it if absent
    pub fn update_attribute(&mut self, attribute: Attribute, value: i32) {
        let source = ModifierSource::Attribute(attribute);
        if !self.replace(source, value) {
            self.insert(Modifier { source, value });
        }
    }

    /// Removes every modifier of the given bonus type
    pub fn remove_bonus(&mut self, bonus: BonusType) {
        self.modifiers.retain(|m| m.source != ModifierSource::Bonus(bonus));
    }

    /// Stat-block line: `15 (+2 Dex, +3 armor)`
    pub fn armor_class_line(&self) -> String {
        let mut line = self.total().to_string();
        if !self.modifiers.is_empty() {
            let parts: Vec<String> = self
                .modifiers
                .iter()
                .map(|m| {
                    let label = match m.source {
                        ModifierSource::Attribute(attribute) => attribute.abbreviation(),
                        ModifierSource::Bonus(bonus) => bonus.bonus_name(),
                    };
                    format!("{} {}", format_bonus(m.value), label)
                })
                .collect();
            line.push_str(&format!(" ({})", parts.join(", ")));
        }
        line
    }

    fn replace(&mut self, source: ModifierSource, value: i32) -> bool {
        match self.modifiers.iter_mut().find(|m| m.source == source) {
            Some(existing) => {
                existing.value = value;
                true
            }
            None => false,
        }
    }

    fn insert(&mut self, modifier: Modifier) {
        let index = self
            .modifiers
            .partition_point(|m| m.source <= modifier.source);
        self.modifiers.insert(index, modifier);
    }
}

impl fmt::Display for ArmorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AC {}", self.total())
    }
}
