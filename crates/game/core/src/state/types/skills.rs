//! Timed menu-skill buffs and per-encounter adventure skills.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::state::types::common::Timestamp;

/// Rollable menu skill buffs.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum MenuSkillKind {
    CoinVacuum,
    Treasurer,
    XpSurge,
    LuckyMining,
    Bartering,
    GoldenTouch,
}

impl MenuSkillKind {
    pub const ALL: [MenuSkillKind; 6] = [
        MenuSkillKind::CoinVacuum,
        MenuSkillKind::Treasurer,
        MenuSkillKind::XpSurge,
        MenuSkillKind::LuckyMining,
        MenuSkillKind::Bartering,
        MenuSkillKind::GoldenTouch,
    ];
}

/// The currently active timed buff. At most one; a new roll replaces it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveMenuSkill {
    pub kind: MenuSkillKind,
    pub activated_at: Timestamp,
    pub expires_at: Timestamp,
}

/// Menu skill state: the active buff plus a roll counter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSkills {
    pub active: Option<ActiveMenuSkill>,
    pub total_rolls: u64,
}

impl MenuSkills {
    /// Drops the active buff once its window has passed.
    pub fn sync(&mut self, now: Timestamp) {
        if let Some(active) = &self.active
            && active.expires_at <= now
        {
            self.active = None;
        }
    }
}

/// Per-encounter adventure skills offered when combat starts.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum AdventureSkillKind {
    RiskyVenture,
    LightningChain,
    SkipCard,
    MetalShield,
    Dodge,
    Berserker,
    Vampiric,
    Healer,
}

impl AdventureSkillKind {
    pub const ALL: [AdventureSkillKind; 8] = [
        AdventureSkillKind::RiskyVenture,
        AdventureSkillKind::LightningChain,
        AdventureSkillKind::SkipCard,
        AdventureSkillKind::MetalShield,
        AdventureSkillKind::Dodge,
        AdventureSkillKind::Berserker,
        AdventureSkillKind::Vampiric,
        AdventureSkillKind::Healer,
    ];
}

/// One-shot effect flags for the selected adventure skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventureSkillEffects {
    pub skip_card_used: bool,
}

/// Selection state for the current encounter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventureSkills {
    pub available: Vec<AdventureSkillKind>,
    pub selected: Option<AdventureSkillKind>,
    pub show_selection: bool,
    pub effects: AdventureSkillEffects,
}

impl AdventureSkills {
    /// Clears everything encounter-scoped when combat ends.
    pub fn end_encounter(&mut self) {
        self.available.clear();
        self.selected = None;
        self.show_selection = false;
        self.effects = AdventureSkillEffects::default();
    }
}
