//! Game mode, cheat flags, and player settings.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Selectable game modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    #[default]
    Normal,
    Survival,
}

/// Mode state. Survival carries a bounded life pool that defeat drains.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameMode {
    pub current: ModeKind,
    pub survival_lives: u32,
    pub max_survival_lives: u32,
}

impl Default for GameMode {
    fn default() -> Self {
        Self {
            current: ModeKind::Normal,
            survival_lives: GameConfig::SURVIVAL_LIVES,
            max_survival_lives: GameConfig::SURVIVAL_LIVES,
        }
    }
}

/// User-toggleable cheat flags.
///
/// These are first-class, namespaced state. They never mutate stored
/// balances; each flag is consulted at the transition boundary to skip the
/// corresponding deduction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cheats {
    pub infinite_coins: bool,
    pub infinite_gems: bool,
    pub obtain_any_item: bool,
}

/// Which cheat flag a toggle targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheatKind {
    InfiniteCoins,
    InfiniteGems,
    ObtainAnyItem,
}

/// Cosmetic/UX settings. Opaque to game rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    pub colorblind_mode: bool,
    pub notifications: bool,
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            colorblind_mode: false,
            notifications: true,
            language: "en".to_owned(),
        }
    }
}
