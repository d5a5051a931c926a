//! Equipment and inventory economy transitions.
//!
//! Equipping only rebinds the `current_*_id` reference; the stat effect
//! comes from the equipment layer during the post-command derived-stat
//! refresh, so repeated equips cannot compound.

use crate::config::GameConfig;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::{ItemId, ItemKind};

use super::{CommandOutcome, charge_gems};

/// `floor(cost * 1.5)`, the shared upgrade-cost growth curve.
fn grow_upgrade_cost(cost: u64) -> u64 {
    cost * GameConfig::UPGRADE_COST_NUM / GameConfig::UPGRADE_COST_DEN
}

pub(crate) fn equip_weapon(
    state: &mut GameState,
    id: ItemId,
) -> Result<CommandOutcome, CommandError> {
    if state.inventory.weapon(id).is_none() {
        return Err(CommandError::ItemNotFound(id));
    }
    state.inventory.current_weapon_id = Some(id);
    Ok(CommandOutcome::None)
}

pub(crate) fn equip_armor(
    state: &mut GameState,
    id: ItemId,
) -> Result<CommandOutcome, CommandError> {
    if state.inventory.armor(id).is_none() {
        return Err(CommandError::ItemNotFound(id));
    }
    state.inventory.current_armor_id = Some(id);
    Ok(CommandOutcome::None)
}

pub(crate) fn upgrade_weapon(
    state: &mut GameState,
    id: ItemId,
) -> Result<CommandOutcome, CommandError> {
    let cost = state
        .inventory
        .weapon(id)
        .ok_or(CommandError::ItemNotFound(id))?
        .upgrade_cost;
    charge_gems(state, cost)?;

    // Lookup again for the mutation; the guard above makes this infallible.
    if let Some(weapon) = state.inventory.weapon_mut(id) {
        weapon.level += 1;
        weapon.upgrade_cost = grow_upgrade_cost(weapon.upgrade_cost);
    }
    state.statistics.items_upgraded += 1;
    Ok(CommandOutcome::None)
}

pub(crate) fn upgrade_armor(
    state: &mut GameState,
    id: ItemId,
) -> Result<CommandOutcome, CommandError> {
    let cost = state
        .inventory
        .armor(id)
        .ok_or(CommandError::ItemNotFound(id))?
        .upgrade_cost;
    charge_gems(state, cost)?;

    if let Some(armor) = state.inventory.armor_mut(id) {
        armor.level += 1;
        armor.upgrade_cost = grow_upgrade_cost(armor.upgrade_cost);
    }
    state.statistics.items_upgraded += 1;
    Ok(CommandOutcome::None)
}

pub(crate) fn sell_weapon(
    state: &mut GameState,
    id: ItemId,
) -> Result<CommandOutcome, CommandError> {
    if state.inventory.is_weapon_equipped(id) {
        return Err(CommandError::ItemEquipped(id));
    }
    let weapon = state
        .inventory
        .weapon(id)
        .ok_or(CommandError::ItemNotFound(id))?;
    let price = weapon.sell_price;

    state.inventory.weapons.retain(|w| w.id != id);
    state.coins += price;
    state.statistics.coins_earned += price;
    state.statistics.items_sold += 1;
    Ok(CommandOutcome::None)
}

pub(crate) fn sell_armor(
    state: &mut GameState,
    id: ItemId,
) -> Result<CommandOutcome, CommandError> {
    if state.inventory.is_armor_equipped(id) {
        return Err(CommandError::ItemEquipped(id));
    }
    let armor = state
        .inventory
        .armor(id)
        .ok_or(CommandError::ItemNotFound(id))?;
    let price = armor.sell_price;

    state.inventory.armor.retain(|a| a.id != id);
    state.coins += price;
    state.statistics.coins_earned += price;
    state.statistics.items_sold += 1;
    Ok(CommandOutcome::None)
}

/// Unconditional removal by id, no refund. Clears the equipped reference
/// if the discarded item was wearing it.
pub(crate) fn discard_item(
    state: &mut GameState,
    id: ItemId,
) -> Result<CommandOutcome, CommandError> {
    let weapons_before = state.inventory.weapons.len();
    state.inventory.weapons.retain(|w| w.id != id);
    let armor_before = state.inventory.armor.len();
    state.inventory.armor.retain(|a| a.id != id);

    if state.inventory.weapons.len() == weapons_before
        && state.inventory.armor.len() == armor_before
    {
        return Err(CommandError::ItemNotFound(id));
    }

    if state.inventory.current_weapon_id == Some(id) {
        state.inventory.current_weapon_id = None;
    }
    if state.inventory.current_armor_id == Some(id) {
        state.inventory.current_armor_id = None;
    }
    Ok(CommandOutcome::None)
}

/// Sells every matched, unequipped item. Equipped items are skipped, not
/// an error.
pub(crate) fn bulk_sell(
    state: &mut GameState,
    kind: ItemKind,
    ids: &[ItemId],
) -> Result<CommandOutcome, CommandError> {
    let mut credited = 0u64;
    let mut sold = 0u64;

    match kind {
        ItemKind::Weapon => {
            let equipped = state.inventory.current_weapon_id;
            state.inventory.weapons.retain(|w| {
                if ids.contains(&w.id) && equipped != Some(w.id) {
                    credited += w.sell_price;
                    sold += 1;
                    false
                } else {
                    true
                }
            });
        }
        ItemKind::Armor => {
            let equipped = state.inventory.current_armor_id;
            state.inventory.armor.retain(|a| {
                if ids.contains(&a.id) && equipped != Some(a.id) {
                    credited += a.sell_price;
                    sold += 1;
                    false
                } else {
                    true
                }
            });
        }
    }

    state.coins += credited;
    state.statistics.coins_earned += credited;
    state.statistics.items_sold += sold;
    Ok(CommandOutcome::None)
}

/// Upgrades every matched item, all-or-nothing: the total cost across the
/// batch is charged up front. Equipped items are included.
pub(crate) fn bulk_upgrade(
    state: &mut GameState,
    kind: ItemKind,
    ids: &[ItemId],
) -> Result<CommandOutcome, CommandError> {
    let total: u64 = match kind {
        ItemKind::Weapon => state
            .inventory
            .weapons
            .iter()
            .filter(|w| ids.contains(&w.id))
            .map(|w| w.upgrade_cost)
            .sum(),
        ItemKind::Armor => state
            .inventory
            .armor
            .iter()
            .filter(|a| ids.contains(&a.id))
            .map(|a| a.upgrade_cost)
            .sum(),
    };

    charge_gems(state, total)?;

    let mut upgraded = 0u64;
    match kind {
        ItemKind::Weapon => {
            for weapon in state
                .inventory
                .weapons
                .iter_mut()
                .filter(|w| ids.contains(&w.id))
            {
                weapon.level += 1;
                weapon.upgrade_cost = grow_upgrade_cost(weapon.upgrade_cost);
                upgraded += 1;
            }
        }
        ItemKind::Armor => {
            for armor in state
                .inventory
                .armor
                .iter_mut()
                .filter(|a| ids.contains(&a.id))
            {
                armor.level += 1;
                armor.upgrade_cost = grow_upgrade_cost(armor.upgrade_cost);
                upgraded += 1;
            }
        }
    }
    state.statistics.items_upgraded += upgraded;
    Ok(CommandOutcome::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Rarity, Weapon};

    fn weapon(id: u64, upgrade_cost: u64, sell_price: u64) -> Weapon {
        Weapon {
            id: ItemId(id),
            name: format!("Blade {id}"),
            rarity: Rarity::Common,
            base_atk: 10,
            level: 1,
            upgrade_cost,
            sell_price,
        }
    }

    fn state_with_weapons(weapons: Vec<Weapon>) -> GameState {
        let mut state = GameState::default();
        state.inventory.weapons = weapons;
        state
    }

    #[test]
    fn upgrade_requires_gems_and_grows_cost() {
        let mut state = state_with_weapons(vec![weapon(1, 10, 5)]);
        state.gems = 25;

        upgrade_weapon(&mut state, ItemId(1)).unwrap();
        let upgraded = state.inventory.weapon(ItemId(1)).unwrap();
        assert_eq!(upgraded.level, 2);
        assert_eq!(upgraded.upgrade_cost, 15);
        assert_eq!(state.gems, 15);
        assert_eq!(state.statistics.items_upgraded, 1);
    }

    #[test]
    fn upgrade_cost_growth_is_monotonic() {
        for cost in 1u64..200 {
            assert!(grow_upgrade_cost(cost) >= cost);
        }
    }

    #[test]
    fn upgrade_without_gems_is_a_noop() {
        let mut state = state_with_weapons(vec![weapon(1, 10, 5)]);
        state.gems = 9;
        let before = state.clone();
        let err = upgrade_weapon(&mut state, ItemId(1)).unwrap_err();
        assert!(matches!(err, CommandError::InsufficientGems { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn selling_equipped_weapon_is_rejected() {
        let mut state = state_with_weapons(vec![weapon(1, 10, 50)]);
        state.inventory.current_weapon_id = Some(ItemId(1));
        let before = state.clone();
        let err = sell_weapon(&mut state, ItemId(1)).unwrap_err();
        assert_eq!(err, CommandError::ItemEquipped(ItemId(1)));
        assert_eq!(state, before);
    }

    #[test]
    fn selling_credits_coins_and_removes() {
        let mut state = state_with_weapons(vec![weapon(1, 10, 50)]);
        sell_weapon(&mut state, ItemId(1)).unwrap();
        assert_eq!(state.coins, 150);
        assert!(state.inventory.weapons.is_empty());
        assert_eq!(state.statistics.items_sold, 1);
    }

    #[test]
    fn discard_removes_without_refund_and_unequips() {
        let mut state = state_with_weapons(vec![weapon(1, 10, 50)]);
        state.inventory.current_weapon_id = Some(ItemId(1));
        discard_item(&mut state, ItemId(1)).unwrap();
        assert_eq!(state.coins, 100);
        assert!(state.inventory.weapons.is_empty());
        assert_eq!(state.inventory.current_weapon_id, None);
    }

    #[test]
    fn bulk_sell_skips_equipped_items() {
        let mut state =
            state_with_weapons(vec![weapon(1, 10, 50), weapon(2, 10, 30), weapon(3, 10, 20)]);
        state.inventory.current_weapon_id = Some(ItemId(1));
        bulk_sell(&mut state, ItemKind::Weapon, &[ItemId(1), ItemId(2), ItemId(3)]).unwrap();
        assert_eq!(state.coins, 150);
        assert_eq!(state.inventory.weapons.len(), 1);
        assert_eq!(state.inventory.weapons[0].id, ItemId(1));
    }

    #[test]
    fn bulk_upgrade_is_all_or_nothing() {
        let mut state =
            state_with_weapons(vec![weapon(1, 10, 0), weapon(2, 20, 0), weapon(3, 30, 0)]);
        state.gems = 59; // one short of the 60 total
        let before = state.clone();
        let err =
            bulk_upgrade(&mut state, ItemKind::Weapon, &[ItemId(1), ItemId(2), ItemId(3)])
                .unwrap_err();
        assert!(matches!(err, CommandError::InsufficientGems { .. }));
        assert_eq!(state, before);

        state.gems = 60;
        bulk_upgrade(&mut state, ItemKind::Weapon, &[ItemId(1), ItemId(2), ItemId(3)]).unwrap();
        assert_eq!(state.gems, 0);
        assert!(state.inventory.weapons.iter().all(|w| w.level == 2));
        assert_eq!(state.statistics.items_upgraded, 3);
    }

    #[test]
    fn bulk_upgrade_includes_equipped_items() {
        let mut state = state_with_weapons(vec![weapon(1, 10, 0)]);
        state.inventory.current_weapon_id = Some(ItemId(1));
        state.gems = 10;
        bulk_upgrade(&mut state, ItemKind::Weapon, &[ItemId(1)]).unwrap();
        assert_eq!(state.inventory.weapon(ItemId(1)).unwrap().level, 2);
    }

    #[test]
    fn equip_unknown_item_is_rejected() {
        let mut state = GameState::default();
        let before = state.clone();
        assert!(equip_weapon(&mut state, ItemId(7)).is_err());
        assert_eq!(state, before);
    }
}
