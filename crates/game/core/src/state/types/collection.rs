//! Collection book: discovery tracking for generated items.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::state::types::item::Rarity;

/// Per-rarity discovery counters.
///
/// A struct rather than a map so the JSON shape is stable and every tier is
/// always present in the save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityCounts {
    pub common: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
    pub mythical: u32,
}

impl RarityCounts {
    pub fn increment(&mut self, rarity: Rarity) {
        match rarity {
            Rarity::Common => self.common += 1,
            Rarity::Rare => self.rare += 1,
            Rarity::Epic => self.epic += 1,
            Rarity::Legendary => self.legendary += 1,
            Rarity::Mythical => self.mythical += 1,
        }
    }

    pub fn get(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythical => self.mythical,
        }
    }
}

/// Sets of discovered item names plus rarity counters; monotonically grows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionBook {
    pub weapons: BTreeSet<String>,
    pub armor: BTreeSet<String>,
    pub total_weapons_found: u32,
    pub total_armor_found: u32,
    pub rarity_counts: RarityCounts,
}

impl CollectionBook {
    /// Records a weapon discovery. Counters only move on first sighting of
    /// a name; the rarity tally counts every drop.
    pub fn record_weapon(&mut self, name: &str, rarity: Rarity) {
        if self.weapons.insert(name.to_owned()) {
            self.total_weapons_found += 1;
        }
        self.rarity_counts.increment(rarity);
    }

    pub fn record_armor(&mut self, name: &str, rarity: Rarity) {
        if self.armor.insert(name.to_owned()) {
            self.total_armor_found += 1;
        }
        self.rarity_counts.increment(rarity);
    }
}
