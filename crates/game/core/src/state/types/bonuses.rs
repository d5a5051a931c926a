//! Bonus sources feeding the derived-stats calculator: research, the
//! Garden of Growth, and global multipliers.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::state::types::common::Timestamp;

/// Flat per-stat bonuses earned through research.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchBonuses {
    pub atk: u32,
    pub def: u32,
    pub hp: u32,
}

/// Research progression. The flat bonuses are the part the stat calculator
/// reads; level/spend bookkeeping is for the surrounding UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Research {
    pub level: u32,
    pub total_spent: u64,
    pub bonuses: ResearchBonuses,
}

/// Garden of Growth: a planted seed converts watered hours into growth
/// centimeters, which feed a percentage stat bonus.
///
/// Growth accrues lazily: [`GardenOfGrowth::sync`] folds wall-clock time
/// since the last update into `growth_cm`, bounded by the water remaining.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenOfGrowth {
    pub is_planted: bool,
    pub planted_at: Option<Timestamp>,
    pub last_update: Option<Timestamp>,
    pub growth_cm: f64,
    pub water_hours_remaining: f64,
    pub seed_cost: u64,
    pub water_cost_per_day: u64,
}

impl Default for GardenOfGrowth {
    fn default() -> Self {
        Self {
            is_planted: false,
            planted_at: None,
            last_update: None,
            growth_cm: 0.0,
            water_hours_remaining: 0.0,
            seed_cost: GameConfig::GARDEN_SEED_COST,
            water_cost_per_day: GameConfig::GARDEN_WATER_COST_PER_DAY,
        }
    }
}

impl GardenOfGrowth {
    /// Percentage bonus currently contributed to derived stats.
    pub fn total_growth_bonus(&self) -> f64 {
        self.growth_cm * GameConfig::GARDEN_BONUS_PCT_PER_CM
    }

    /// Folds elapsed wall-clock time into growth. Growth only accrues
    /// while water remains and stops at the growth cap.
    pub fn sync(&mut self, now: Timestamp) {
        if !self.is_planted {
            return;
        }
        let Some(last) = self.last_update else {
            self.last_update = Some(now);
            return;
        };
        let elapsed_hours = now.since(last) as f64 / 3_600_000.0;
        let watered = elapsed_hours.min(self.water_hours_remaining);
        self.growth_cm = (self.growth_cm + watered * GameConfig::GARDEN_GROWTH_CM_PER_HOUR)
            .min(GameConfig::GARDEN_MAX_GROWTH_CM);
        self.water_hours_remaining -= watered;
        self.last_update = Some(now);
    }
}

/// Global per-stat and reward multipliers. Neutral at 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Multipliers {
    pub atk: f64,
    pub def: f64,
    pub hp: f64,
    pub coins: f64,
    pub gems: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            atk: 1.0,
            def: 1.0,
            hp: 1.0,
            coins: 1.0,
            gems: 1.0,
        }
    }
}
