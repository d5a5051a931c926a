//! Fragment merchant transitions.

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::{MerchantReward, Rarity};

use super::{CommandOutcome, roll_seed};

const CTX_ITEM_SLOT: u32 = 0;
const CTX_ITEM: u32 = 1;

/// Spends 5 fragments and rolls the fixed 3-option reward menu.
pub(crate) fn spend_fragments(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<CommandOutcome, CommandError> {
    let content = env.content()?;
    let rng = env.rng()?;

    if state.merchant.fragments < GameConfig::MERCHANT_FRAGMENT_COST {
        return Err(CommandError::InsufficientFragments {
            needed: GameConfig::MERCHANT_FRAGMENT_COST,
            available: state.merchant.fragments,
        });
    }
    state.merchant.fragments -= GameConfig::MERCHANT_FRAGMENT_COST;

    let zone = u64::from(state.zone);
    let id = state.allocate_item_id();
    let item_seed = roll_seed(state, CTX_ITEM);
    let item_reward = if rng.flip(roll_seed(state, CTX_ITEM_SLOT)) {
        MerchantReward::LegendaryWeapon(content.generate_weapon(
            id,
            item_seed,
            Some(Rarity::Legendary),
        ))
    } else {
        MerchantReward::LegendaryArmor(content.generate_armor(
            id,
            item_seed,
            Some(Rarity::Legendary),
        ))
    };

    let menu = vec![
        MerchantReward::Coins {
            amount: 500 + zone * 25,
        },
        MerchantReward::Gems {
            amount: 20 + zone * 2,
        },
        item_reward,
    ];
    state.merchant.pending_rewards = menu.clone();

    Ok(CommandOutcome::MerchantMenu(menu))
}

/// Applies exactly one pending reward and closes the menu.
pub(crate) fn select_reward(
    state: &mut GameState,
    index: usize,
) -> Result<CommandOutcome, CommandError> {
    if state.merchant.pending_rewards.is_empty() {
        return Err(CommandError::NoMerchantMenu);
    }
    if index >= state.merchant.pending_rewards.len() {
        return Err(CommandError::InvalidSelection);
    }

    let reward = state.merchant.pending_rewards.swap_remove(index);
    match reward {
        MerchantReward::Coins { amount } => {
            state.coins += amount;
            state.statistics.coins_earned += amount;
        }
        MerchantReward::Gems { amount } => {
            state.gems += amount;
            state.statistics.gems_earned += amount;
        }
        MerchantReward::LegendaryWeapon(weapon) => {
            state
                .collection_book
                .record_weapon(&weapon.name, weapon.rarity);
            state.inventory.weapons.push(weapon);
            state.statistics.items_collected += 1;
        }
        MerchantReward::LegendaryArmor(armor) => {
            state.collection_book.record_armor(&armor.name, armor.rarity);
            state.inventory.armor.push(armor);
            state.statistics.items_collected += 1;
        }
    }
    state.merchant.pending_rewards.clear();
    Ok(CommandOutcome::None)
}
