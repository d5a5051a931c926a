//! Knowledge streak tracking.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Consecutive-correct-answer counter driving a reward multiplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeStreak {
    pub current: u32,
    pub best: u32,
    pub multiplier: f64,
}

impl Default for KnowledgeStreak {
    fn default() -> Self {
        Self {
            current: 0,
            best: 0,
            multiplier: 1.0,
        }
    }
}

impl KnowledgeStreak {
    /// Multiplier for a given streak length: `1 + floor(n/5) * 0.1`.
    pub fn multiplier_for(current: u32) -> f64 {
        1.0 + f64::from(current / GameConfig::STREAK_STEP) * GameConfig::STREAK_STEP_BONUS
    }

    pub fn record_correct(&mut self) {
        self.current += 1;
        self.best = self.best.max(self.current);
        self.multiplier = Self::multiplier_for(self.current);
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.multiplier = 1.0;
    }
}
