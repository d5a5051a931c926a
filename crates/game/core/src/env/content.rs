//! Content generator oracle.
//!
//! Procedural generation is consumed, never implemented, by this crate:
//! the engine asks for fully-formed entities and treats the answers as
//! opaque. Item ids are allocated by the state (like every other id) and
//! passed in, so generators stay pure.

use crate::state::types::{Armor, Enemy, ItemId, Rarity, Relic, Weapon};

/// Chest rarity weights: common/rare/epic/legendary/mythical, in that
/// fixed order, summing to 100.
pub type RarityWeights = [u32; 5];

/// Generates weapons, armor, enemies, and relics.
///
/// All methods are pure given `seed`; implementations must not consult
/// any ambient randomness or clock.
pub trait ContentOracle: Send + Sync {
    /// Generate a weapon. `rarity` of `None` lets the generator pick.
    fn generate_weapon(&self, id: ItemId, seed: u64, rarity: Option<Rarity>) -> Weapon;

    /// Generate an armor piece. `rarity` of `None` lets the generator pick.
    fn generate_armor(&self, id: ItemId, seed: u64, rarity: Option<Rarity>) -> Armor;

    /// Generate an enemy scaled to `zone`.
    fn generate_enemy(&self, seed: u64, zone: u32) -> Enemy;

    /// Generate a market relic (atk-only or def-only).
    fn generate_relic(&self, id: ItemId, seed: u64) -> Relic;

    /// Rarity weights for a chest of the given coin cost.
    fn chest_rarity_weights(&self, cost: u64) -> RarityWeights;
}
