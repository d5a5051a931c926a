//! Relic transitions: Yojef Market purchases and owned-relic management.
//!
//! A relic is always in exactly one place: the market, the owned
//! (unequipped) list, or the equipped list.

use crate::config::GameConfig;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::ItemId;

use super::{CommandOutcome, charge_gems};

/// Buys a relic off the market. It lands equipped, taking effect
/// immediately; sell requires unequipping first.
pub(crate) fn purchase(state: &mut GameState, id: ItemId) -> Result<CommandOutcome, CommandError> {
    let cost = state
        .yojef_market
        .item(id)
        .ok_or(CommandError::RelicNotFound(id))?
        .cost;
    charge_gems(state, cost)?;

    let Some(index) = state.yojef_market.items.iter().position(|r| r.id == id) else {
        return Err(CommandError::RelicNotFound(id));
    };
    let relic = state.yojef_market.items.remove(index);
    state.inventory.equipped_relics.push(relic);
    Ok(CommandOutcome::None)
}

/// Upgrades an owned relic (equipped or not). Stat deltas only apply to
/// the stat the relic defines.
pub(crate) fn upgrade(state: &mut GameState, id: ItemId) -> Result<CommandOutcome, CommandError> {
    let cost = state
        .inventory
        .owned_relic(id)
        .or_else(|| state.inventory.equipped_relic(id))
        .ok_or(CommandError::RelicNotFound(id))?
        .upgrade_cost;
    charge_gems(state, cost)?;

    if let Some(relic) = state.inventory.relic_mut(id) {
        relic.level += 1;
        relic.upgrade_cost =
            relic.upgrade_cost * GameConfig::UPGRADE_COST_NUM / GameConfig::UPGRADE_COST_DEN;
        relic.base_atk = relic.base_atk.map(|atk| atk + GameConfig::RELIC_UPGRADE_ATK);
        relic.base_def = relic.base_def.map(|def| def + GameConfig::RELIC_UPGRADE_DEF);
    }
    state.statistics.items_upgraded += 1;
    Ok(CommandOutcome::None)
}

pub(crate) fn equip(state: &mut GameState, id: ItemId) -> Result<CommandOutcome, CommandError> {
    let Some(index) = state.inventory.relics.iter().position(|r| r.id == id) else {
        return Err(CommandError::RelicNotFound(id));
    };
    let relic = state.inventory.relics.remove(index);
    state.inventory.equipped_relics.push(relic);
    Ok(CommandOutcome::None)
}

pub(crate) fn unequip(state: &mut GameState, id: ItemId) -> Result<CommandOutcome, CommandError> {
    let Some(index) = state
        .inventory
        .equipped_relics
        .iter()
        .position(|r| r.id == id)
    else {
        return Err(CommandError::RelicNotFound(id));
    };
    let relic = state.inventory.equipped_relics.remove(index);
    state.inventory.relics.push(relic);
    Ok(CommandOutcome::None)
}

/// Sells an owned, unequipped relic for half its market cost in gems.
pub(crate) fn sell(state: &mut GameState, id: ItemId) -> Result<CommandOutcome, CommandError> {
    let Some(index) = state.inventory.relics.iter().position(|r| r.id == id) else {
        return Err(CommandError::RelicNotFound(id));
    };
    let relic = state.inventory.relics.remove(index);
    let refund = relic.cost / GameConfig::RELIC_SELL_REFUND_DEN;
    state.gems += refund;
    state.statistics.gems_earned += refund;
    state.statistics.items_sold += 1;
    Ok(CommandOutcome::None)
}
