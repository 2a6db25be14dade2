use crate::labels::{self, Labelled};

/// Typed bonuses; bonuses of the same type do not stack (except dodge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BonusType {
    Alchemical,
    Armor,
    Circumstance,
    Competence,
    Deflection,
    Dodge,
    Enhancement,
    Inherent,
    Insight,
    Luck,
    Morale,
    NaturalArmor,
    Profane,
    Racial,
    Resistance,
    Sacred,
    Shield,
    Size,
    Trait,
}

impl BonusType {
    pub const ALL: [BonusType; 19] = [
        Self::Alchemical,
        Self::Armor,
        Self::Circumstance,
        Self::Competence,
        Self::Deflection,
        Self::Dodge,
        Self::Enhancement,
        Self::Inherent,
        Self::Insight,
        Self::Luck,
        Self::Morale,
        Self::NaturalArmor,
        Self::Profane,
        Self::Racial,
        Self::Resistance,
        Self::Sacred,
        Self::Shield,
        Self::Size,
        Self::Trait,
    ];

    /// Whether several bonuses of this type add up
    pub fn stacks(&self) -> bool {
        matches!(self, Self::Dodge)
    }

    pub fn bonus_name(&self) -> String {
        labels::translate(self, "bonus")
    }
}

impl Labelled for BonusType {
    fn label_key(&self) -> String {
        match self {
            Self::Alchemical => "alchemical",
            Self::Armor => "armor",
            Self::Circumstance => "circumstance",
            Self::Competence => "competence",
            Self::Deflection => "deflection",
            Self::Dodge => "dodge",
            Self::Enhancement => "enhancement",
            Self::Inherent => "inherent",
            Self::Insight => "insight",
            Self::Luck => "luck",
            Self::Morale => "morale",
            Self::NaturalArmor => "natural_armor",
            Self::Profane => "profane",
            Self::Racial => "racial",
            Self::Resistance => "resistance",
            Self::Sacred => "sacred",
            Self::Shield => "shield",
            Self::Size => "size",
            Self::Trait => "trait",
        }
        .to_string()
    }
}
