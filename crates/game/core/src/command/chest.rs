//! Chest opening and the mythical shop.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::{Armor, Rarity, Weapon};

use super::{CommandOutcome, charge_coins, roll_seed};

const CTX_RARITY: u32 = 0;
const CTX_SLOT: u32 = 1;
const CTX_GEMS: u32 = 2;
const CTX_ITEM: u32 = 3;

/// What came out of a chest. Returned to the caller for display; the
/// state update has already happened by the time this is observed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChestItem {
    Weapon(Weapon),
    Armor(Armor),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChestReward {
    pub item: ChestItem,
    pub bonus_gems: u32,
}

/// Samples a rarity from cumulative weights (common..mythical, sum 100).
fn sample_rarity(weights: [u32; 5], roll_1_to_100: u32) -> Rarity {
    let mut cumulative = 0;
    for (tier, weight) in Rarity::ALL.iter().zip(weights) {
        cumulative += weight;
        if roll_1_to_100 <= cumulative {
            return *tier;
        }
    }
    // Weights summing short of 100 resolve to the top tier.
    Rarity::Mythical
}

pub(crate) fn open_chest(
    state: &mut GameState,
    env: &GameEnv<'_>,
    cost: u64,
) -> Result<CommandOutcome, CommandError> {
    let content = env.content()?;
    let rng = env.rng()?;

    charge_coins(state, cost)?;

    let weights = content.chest_rarity_weights(cost);
    let rarity = sample_rarity(weights, rng.roll_d100(roll_seed(state, CTX_RARITY)));

    let bonus_gems = rng.range(
        roll_seed(state, CTX_GEMS),
        GameConfig::CHEST_BONUS_GEMS_MIN,
        GameConfig::CHEST_BONUS_GEMS_MAX,
    );
    state.gems += u64::from(bonus_gems);
    state.statistics.gems_earned += u64::from(bonus_gems);

    let id = state.allocate_item_id();
    let item_seed = roll_seed(state, CTX_ITEM);
    let item = if rng.flip(roll_seed(state, CTX_SLOT)) {
        let weapon = content.generate_weapon(id, item_seed, Some(rarity));
        state
            .collection_book
            .record_weapon(&weapon.name, weapon.rarity);
        state.inventory.weapons.push(weapon.clone());
        ChestItem::Weapon(weapon)
    } else {
        let armor = content.generate_armor(id, item_seed, Some(rarity));
        state.collection_book.record_armor(&armor.name, armor.rarity);
        state.inventory.armor.push(armor.clone());
        ChestItem::Armor(armor)
    };

    state.statistics.chests_opened += 1;
    state.statistics.items_collected += 1;

    Ok(CommandOutcome::Chest(ChestReward { item, bonus_gems }))
}

/// Fixed-price purchase of a guaranteed mythical weapon or armor.
pub(crate) fn purchase_mythical(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<CommandOutcome, CommandError> {
    let content = env.content()?;
    let rng = env.rng()?;

    charge_coins(state, GameConfig::MYTHICAL_PURCHASE_COST)?;

    let id = state.allocate_item_id();
    let item_seed = roll_seed(state, CTX_ITEM);
    let item = if rng.flip(roll_seed(state, CTX_SLOT)) {
        let weapon = content.generate_weapon(id, item_seed, Some(Rarity::Mythical));
        state
            .collection_book
            .record_weapon(&weapon.name, weapon.rarity);
        state.inventory.weapons.push(weapon.clone());
        ChestItem::Weapon(weapon)
    } else {
        let armor = content.generate_armor(id, item_seed, Some(Rarity::Mythical));
        state.collection_book.record_armor(&armor.name, armor.rarity);
        state.inventory.armor.push(armor.clone());
        ChestItem::Armor(armor)
    };

    state.statistics.items_collected += 1;

    Ok(CommandOutcome::Chest(ChestReward {
        item,
        bonus_gems: 0,
    }))
}
