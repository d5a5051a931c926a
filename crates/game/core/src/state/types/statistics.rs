//! Cumulative gameplay counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Correct/total tally for one question category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryAccuracy {
    pub correct: u64,
    pub total: u64,
}

/// Lifetime counters. Monotonically non-decreasing except where an
/// operation explicitly resets a subsystem (the knowledge streak lives
/// elsewhere for exactly that reason).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_questions_answered: u64,
    pub correct_answers: u64,
    pub total_damage_dealt: u64,
    pub total_damage_taken: u64,
    pub total_victories: u64,
    pub total_deaths: u64,
    pub revivals: u64,
    pub chests_opened: u64,
    pub items_collected: u64,
    pub items_upgraded: u64,
    pub items_sold: u64,
    pub coins_earned: u64,
    pub gems_earned: u64,
    pub shiny_gems_earned: u64,
    pub zones_reached: u32,
    pub accuracy_by_category: BTreeMap<String, CategoryAccuracy>,
}

impl Statistics {
    /// Tallies one answered question for `category`.
    pub fn record_answer(&mut self, category: Option<&str>, correct: bool) {
        self.total_questions_answered += 1;
        if correct {
            self.correct_answers += 1;
        }
        if let Some(category) = category {
            let entry = self
                .accuracy_by_category
                .entry(category.to_owned())
                .or_default();
            entry.total += 1;
            if correct {
                entry.correct += 1;
            }
        }
    }
}
