//! Level/experience progression, prestige, and offline accrual.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::state::types::common::Timestamp;

/// Experience-driven progression. Accrual itself happens outside this
/// core; level is always derived from experience through [`level_for`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progression {
    pub level: u32,
    pub experience: u64,
    pub skill_points: u32,
    pub unlocked_skills: Vec<String>,
    pub prestige_points: u32,
    pub times_prestiged: u32,
    pub is_premium: bool,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            skill_points: 0,
            unlocked_skills: Vec::new(),
            prestige_points: 0,
            times_prestiged: 0,
            is_premium: false,
        }
    }
}

/// Level for a given experience total: `floor(sqrt(xp / 100)) + 1`.
pub fn level_for(experience: u64) -> u32 {
    let steps = (experience / GameConfig::XP_CURVE_DIVISOR) as f64;
    steps.sqrt().floor() as u32 + 1
}

/// Rewards accumulated while the game was closed.
///
/// Filled in by the store's load-time sync from `last_seen`, consumed by
/// the claim operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineProgress {
    pub last_seen: Option<Timestamp>,
    pub accumulated_coins: u64,
    pub accumulated_gems: u64,
    pub accumulated_seconds: u64,
    pub max_offline_hours: u32,
}

impl Default for OfflineProgress {
    fn default() -> Self {
        Self {
            last_seen: None,
            accumulated_coins: 0,
            accumulated_gems: 0,
            accumulated_seconds: 0,
            max_offline_hours: GameConfig::OFFLINE_MAX_HOURS,
        }
    }
}
