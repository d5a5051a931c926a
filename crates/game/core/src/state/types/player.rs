//! Player stat block and enemy representation.

use serde::{Deserialize, Serialize};

/// Player combat stats.
///
/// `base_*` fields are the stored foundation. `atk`, `def` and `max_hp` are
/// derived and recomputed by [`crate::stats::refresh`] whenever a bonus
/// source changes; `hp` is always clamped to `max_hp`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub base_atk: u32,
    pub base_def: u32,
    pub base_hp: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hp: 100,
            max_hp: 100,
            atk: 20,
            def: 10,
            base_atk: 20,
            base_def: 10,
            base_hp: 100,
        }
    }
}

/// The opponent in the current encounter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enemy {
    pub name: String,
    pub zone: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            name: String::new(),
            zone: 1,
            hp: 1,
            max_hp: 1,
            atk: 0,
            def: 0,
        }
    }
}

impl Enemy {
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
