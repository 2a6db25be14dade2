use crate::labels::{self, Labelled};
use crate::rules::Attribute;
use crate::rules::Attribute::{
    Charisma as CHA, Dexterity as DEX, Intelligence as INT, Strength as STR, Wisdom as WIS,
};
use std::fmt;

/// Skills of the core rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skill {
    Acrobatics,
    Appraise,
    Bluff,
    Climb,
    Craft,
    Diplomacy,
    DisableDevice,
    Disguise,
    EscapeArtist,
    Fly,
    HandleAnimal,
    Heal,
    Intimidate,
    KnowledgeArcana,
    KnowledgeDungeoneering,
    KnowledgeEngineering,
    KnowledgeGeography,
    KnowledgeHistory,
    KnowledgeLocal,
    KnowledgeNature,
    KnowledgeNobility,
    KnowledgePlanes,
    KnowledgeReligion,
    Linguistics,
    Perception,
    Perform,
    Profession,
    Ride,
    SenseMotive,
    SleightOfHand,
    Spellcraft,
    Stealth,
    Survival,
    Swim,
    UseMagicDevice,
}

/// Static rules data for a skill
struct SkillRule {
    key: &'static str,
    base_attribute: Attribute,
    armor_check_penalty: bool,
    typed: bool,
}

const fn rule(
    key: &'static str,
    base_attribute: Attribute,
    armor_check_penalty: bool,
    typed: bool,
) -> SkillRule {
    SkillRule {
        key,
        base_attribute,
        armor_check_penalty,
        typed,
    }
}

// Indexed by `Skill as usize`.
static SKILL_TABLE: [SkillRule; 35] = [
    rule("acrobatics", DEX, true, false),
    rule("appraise", INT, false, false),
    rule("bluff", CHA, false, false),
    rule("climb", STR, true, false),
    rule("craft", INT, false, true),
    rule("diplomacy", CHA, false, false),
    rule("disable_device", DEX, true, false),
    rule("disguise", CHA, false, false),
    rule("escape_artist", DEX, true, false),
    rule("fly", DEX, true, false),
    rule("handle_animal", CHA, false, false),
    rule("heal", WIS, false, false),
    rule("intimidate", CHA, false, false),
    rule("knowledge_arcana", INT, false, false),
    rule("knowledge_dungeoneering", INT, false, false),
    rule("knowledge_engineering", INT, false, false),
    rule("knowledge_geography", INT, false, false),
    rule("knowledge_history", INT, false, false),
    rule("knowledge_local", INT, false, false),
    rule("knowledge_nature", INT, false, false),
    rule("knowledge_nobility", INT, false, false),
    rule("knowledge_planes", INT, false, false),
    rule("knowledge_religion", INT, false, false),
    rule("linguistics", INT, false, false),
    rule("perception", WIS, false, false),
    rule("perform", CHA, false, true),
    rule("profession", WIS, false, true),
    rule("ride", DEX, true, false),
    rule("sense_motive", WIS, false, false),
    rule("sleight_of_hand", DEX, true, false),
    rule("spellcraft", INT, false, false),
    rule("stealth", DEX, true, false),
    rule("survival", WIS, false, false),
    rule("swim", STR, true, false),
    rule("use_magic_device", CHA, false, false),
];

impl Skill {
    pub const ALL: [Skill; 35] = [
        Self::Acrobatics,
        Self::Appraise,
        Self::Bluff,
        Self::Climb,
        Self::Craft,
        Self::Diplomacy,
        Self::DisableDevice,
        Self::Disguise,
        Self::EscapeArtist,
        Self::Fly,
        Self::HandleAnimal,
        Self::Heal,
        Self::Intimidate,
        Self::KnowledgeArcana,
        Self::KnowledgeDungeoneering,
        Self::KnowledgeEngineering,
        Self::KnowledgeGeography,
        Self::KnowledgeHistory,
        Self::KnowledgeLocal,
        Self::KnowledgeNature,
        Self::KnowledgeNobility,
        Self::KnowledgePlanes,
        Self::KnowledgeReligion,
        Self::Linguistics,
        Self::Perception,
        Self::Perform,
        Self::Profession,
        Self::Ride,
        Self::SenseMotive,
        Self::SleightOfHand,
        Self::Spellcraft,
        Self::Stealth,
        Self::Survival,
        Self::Swim,
        Self::UseMagicDevice,
    ];

    fn rule(&self) -> &'static SkillRule {
        &SKILL_TABLE[*self as usize]
    }

    pub fn base_attribute(&self) -> Attribute {
        self.rule().base_attribute
    }

    /// Whether armor check penalties apply to checks with this skill
    pub fn armor_check_penalty(&self) -> bool {
        self.rule().armor_check_penalty
    }

    /// Typed skills (Craft, Perform, Profession) need a specialization
    pub fn is_typed(&self) -> bool {
        self.rule().typed
    }

    pub fn skill_name(&self) -> String {
        labels::translate(self, "skill")
    }
}

impl Labelled for Skill {
    fn label_key(&self) -> String {
        self.rule().key.to_string()
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.skill_name())
    }
}

/// A creature's total bonus in one skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRank {
    pub skill: Skill,
    pub specialization: Option<String>,
    pub bonus: i32,
}

impl SkillRank {
    pub fn new(skill: Skill, specialization: Option<String>, bonus: i32) -> Self {
        Self {
            skill,
            specialization,
            bonus,
        }
    }
}

impl fmt::Display for SkillRank {
    /// Stat-block form: `Acrobatics (Dex) +5`, `Craft [alchemy] (Int) +7`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.skill.skill_name())?;
        if let Some(specialization) = &self.specialization {
            write!(f, " [{}]", specialization)?;
        }
        write!(
            f,
            " ({}) {}",
            self.skill.base_attribute().abbreviation(),
            labels::format_bonus(self.bonus)
        )
    }
}
