//! Game rules vocabulary
//!
//! Value types shared by rules entities: ability scores, bonus and energy
//! types, saving throws, skills, armor class and resistances. Display names
//! come from the label bundle.

mod armor_class;
mod attribute;
mod bonus;
mod energy;
mod resistances;
mod saves;
mod skill;

pub use armor_class::{ArmorClass, Modifier, ModifierSource};
pub use attribute::Attribute;
pub use bonus::BonusType;
pub use energy::EnergyType;
pub use resistances::Resistances;
pub use saves::{SaveType, Saves};
pub use skill::{Skill, SkillRank};

use thiserror::Error;

/// Errors for out-of-range rules values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("Attribute score must be zero or positive, got {0}")]
    NegativeAttributeScore(i32),

    #[error("Resistance value must be zero or positive, got {0}")]
    NegativeResistance(i32),
}
