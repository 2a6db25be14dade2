//! Source book catalog
//!
//! Every book of the reference document is one `Source` variant. The
//! descriptive data lives in a static table indexed by variant, so the enum
//! itself stays a plain `Copy` tag.

use std::fmt;

/// A book of the reference document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    CoreRulebook,
    Bestiary1,
    Bestiary2,
    Bestiary3,
    Bestiary4,
    Bestiary5,
    BonusBestiary,
    GameMasteryGuide,
    AdvancedPlayersGuide,
    UltimateCombat,
    UltimateMagic,
    AdvancedRaceGuide,
    UltimateEquipment,
    NpcCodex,
    UltimateCampaign,
    GmScreen,
    PlayerCharacterFolio,
    MythicAdventures,
    AdvancedClassGuide,
    MonsterCodex,
    StrategyGuide,
    Unchained,
    OccultAdventures,
    UltimateIntrigue,
    TechnologyGuide,
}

/// Descriptive data for one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    /// Stable upper-snake identifier, derived from the book's URL segment
    pub key: &'static str,
    pub display_name: &'static str,
    /// Short code, unique within the catalog
    pub tag: &'static str,
    pub author: &'static str,
}

const PAIZO: &str = "Paizo, Inc.";

const fn info(key: &'static str, display_name: &'static str, tag: &'static str) -> SourceInfo {
    SourceInfo {
        key,
        display_name,
        tag,
        author: PAIZO,
    }
}

// Indexed by `Source as usize`; order must follow the enum declaration.
static SOURCE_TABLE: [SourceInfo; 25] = [
    info("CORE_RULEBOOK", "Pathfinder Core Rulebook", "core"),
    info("BESTIARY1", "Bestiary", "b1"),
    info("BESTIARY2", "Bestiary 2", "b2"),
    info("BESTIARY3", "Bestiary 3", "b3"),
    info("BESTIARY4", "Bestiary 4", "b4"),
    info("BESTIARY5", "Bestiary 5", "b5"),
    info("BONUS_BESTIARY", "Bonus Bestiary", "bb"),
    info("GAME_MASTERY_GUIDE", "GameMastery Guide", "gmg"),
    info("ADVANCED_PLAYERS_GUIDE", "Advanced Players Guide", "apg"),
    info("ULTIMATE_COMBAT", "Ultimate Combat", "uc"),
    info("ULTIMATE_MAGIC", "Ultimate Magic", "um"),
    info("ADVANCED_RACE_GUIDE", "Advanced Race Guide", "arg"),
    info("ULTIMATE_EQUIPMENT", "Ultimate Equipment", "ue"),
    info("NPC_CODEX", "NPC Codex", "npc"),
    info("ULTIMATE_CAMPAIGN", "Ultimate Campaign", "ucamp"),
    info("GM_SCREEN", "GM Screen", "gm-screen"),
    info("PLAYER_CHARACTER_FOLIO", "Player Character Folio", "pcf"),
    info("MYTHIC_ADVENTURES", "Mythic Adventures", "ma"),
    info("ADVANCED_CLASS_GUIDE", "Advanced Class Guide", "acg"),
    info("MONSTER_CODEX", "Monster Codex", "mc"),
    info("STRATEGY_GUIDE", "Strategy Guide", "sg"),
    info("UNCHAINED", "Pathfinder Unchained", "unch"),
    info("OCCULT_ADVENTURES", "Occult Adventures", "occ"),
    info("ULTIMATE_INTRIGUE", "Ultimate Intrigue", "ui"),
    info("TECHNOLOGY_GUIDE", "Technology Guide", "tg"),
];

impl Source {
    /// All catalog entries, in declaration order
    pub const ALL: [Source; 25] = [
        Self::CoreRulebook,
        Self::Bestiary1,
        Self::Bestiary2,
        Self::Bestiary3,
        Self::Bestiary4,
        Self::Bestiary5,
        Self::BonusBestiary,
        Self::GameMasteryGuide,
        Self::AdvancedPlayersGuide,
        Self::UltimateCombat,
        Self::UltimateMagic,
        Self::AdvancedRaceGuide,
        Self::UltimateEquipment,
        Self::NpcCodex,
        Self::UltimateCampaign,
        Self::GmScreen,
        Self::PlayerCharacterFolio,
        Self::MythicAdventures,
        Self::AdvancedClassGuide,
        Self::MonsterCodex,
        Self::StrategyGuide,
        Self::Unchained,
        Self::OccultAdventures,
        Self::UltimateIntrigue,
        Self::TechnologyGuide,
    ];

    /// Returns the descriptive data for this source
    pub fn info(self) -> &'static SourceInfo {
        &SOURCE_TABLE[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn tag(self) -> &'static str {
        self.info().tag
    }

    pub fn author(self) -> &'static str {
        self.info().author
    }

    /// Looks up a source by its upper-snake key (e.g. `ULTIMATE_COMBAT`)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.key() == key)
    }

    /// Looks up a source by its short tag (e.g. `uc`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.tag() == tag)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
