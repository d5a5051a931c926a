//! Derived-stats calculator.
//!
//! Combat-facing atk/def/max_hp are pure functions of the stored base
//! stats plus layered bonus sources. They are recomputed after every
//! accepted command, never edited in place, so equipping the same item
//! twice is indistinguishable from equipping it once.
//!
//! Layers, applied per stat S:
//!
//! ```text
//! effective_S = floor((base_S + research_S) * (1 + garden/100) * multiplier_S)
//!             + equipment_S
//! ```
//!
//! Current hp is clamped to the new max: lowering max never leaves hp
//! above the ceiling, raising it never auto-heals.

use crate::state::GameState;
use crate::state::types::{Inventory, Multipliers, ResearchBonuses};

/// Flat bonuses contributed by equipped gear: the current weapon and
/// armor (level-scaled) plus every equipped relic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipmentBonus {
    pub atk: u32,
    pub def: u32,
}

impl EquipmentBonus {
    /// Aggregates the equipment layer from the inventory.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut atk = inventory
            .current_weapon()
            .map_or(0, |weapon| weapon.equip_bonus());
        let mut def = inventory
            .current_armor()
            .map_or(0, |armor| armor.equip_bonus());

        for relic in &inventory.equipped_relics {
            atk += relic.base_atk.unwrap_or(0);
            def += relic.base_def.unwrap_or(0);
        }

        Self { atk, def }
    }
}

/// Derived atk/def/max_hp for a stat block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DerivedStats {
    pub atk: u32,
    pub def: u32,
    pub max_hp: u32,
}

/// One stat through the multiplicative layers.
fn layered(base: u32, research: u32, garden_pct: f64, multiplier: f64) -> u32 {
    let boosted = f64::from(base + research) * (1.0 + garden_pct / 100.0) * multiplier;
    boosted.floor().max(0.0) as u32
}

/// Computes effective stats from the bonus sources.
///
/// Identity: with zero research, zero garden bonus, multipliers at 1.0
/// and no equipment, the output equals the base stats.
pub fn effective(
    base_atk: u32,
    base_def: u32,
    base_hp: u32,
    research: &ResearchBonuses,
    garden_pct: f64,
    multipliers: &Multipliers,
    equipment: EquipmentBonus,
) -> DerivedStats {
    DerivedStats {
        atk: layered(base_atk, research.atk, garden_pct, multipliers.atk) + equipment.atk,
        def: layered(base_def, research.def, garden_pct, multipliers.def) + equipment.def,
        max_hp: layered(base_hp, research.hp, garden_pct, multipliers.hp),
    }
}

/// Recomputes the player's derived stats in place and clamps hp.
pub fn refresh(state: &mut GameState) {
    let equipment = EquipmentBonus::from_inventory(&state.inventory);
    let derived = effective(
        state.player_stats.base_atk,
        state.player_stats.base_def,
        state.player_stats.base_hp,
        &state.research.bonuses,
        state.garden_of_growth.total_growth_bonus(),
        &state.multipliers,
        equipment,
    );

    state.player_stats.atk = derived.atk;
    state.player_stats.def = derived.def;
    state.player_stats.max_hp = derived.max_hp;
    state.player_stats.hp = state.player_stats.hp.min(derived.max_hp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Rarity, Relic, Weapon};

    fn neutral() -> (ResearchBonuses, Multipliers) {
        (ResearchBonuses::default(), Multipliers::default())
    }

    #[test]
    fn neutral_sources_are_identity() {
        let (research, multipliers) = neutral();
        let derived = effective(
            20,
            10,
            100,
            &research,
            0.0,
            &multipliers,
            EquipmentBonus::default(),
        );
        assert_eq!(derived.atk, 20);
        assert_eq!(derived.def, 10);
        assert_eq!(derived.max_hp, 100);
    }

    #[test]
    fn layers_compose_with_floor() {
        let research = ResearchBonuses {
            atk: 5,
            def: 0,
            hp: 0,
        };
        let multipliers = Multipliers {
            atk: 1.5,
            ..Multipliers::default()
        };
        // (20 + 5) * 1.10 * 1.5 = 41.25 -> 41
        let derived = effective(
            20,
            10,
            100,
            &research,
            10.0,
            &multipliers,
            EquipmentBonus::default(),
        );
        assert_eq!(derived.atk, 41);
    }

    #[test]
    fn refresh_clamps_hp_to_new_max() {
        let mut state = GameState::default();
        state.player_stats.hp = 100;
        state.player_stats.base_hp = 50;
        refresh(&mut state);
        assert_eq!(state.player_stats.max_hp, 50);
        assert_eq!(state.player_stats.hp, 50);
    }

    #[test]
    fn refresh_never_auto_heals() {
        let mut state = GameState::default();
        state.player_stats.hp = 30;
        state.multipliers.hp = 2.0;
        refresh(&mut state);
        assert_eq!(state.player_stats.max_hp, 200);
        assert_eq!(state.player_stats.hp, 30);
    }

    #[test]
    fn equipping_twice_equals_equipping_once() {
        let mut state = GameState::default();
        state.inventory.weapons.push(Weapon {
            id: crate::state::ItemId(1),
            name: "Oak Staff".to_owned(),
            rarity: Rarity::Common,
            base_atk: 15,
            level: 3,
            upgrade_cost: 10,
            sell_price: 20,
        });
        state.inventory.current_weapon_id = Some(crate::state::ItemId(1));

        refresh(&mut state);
        let once = state.player_stats.clone();
        refresh(&mut state);
        assert_eq!(state.player_stats, once);
        // base 20 + weapon 15 + (3-1)*10 = 55
        assert_eq!(state.player_stats.atk, 55);
    }

    #[test]
    fn equipped_relics_feed_the_equipment_layer() {
        let mut state = GameState::default();
        state.inventory.equipped_relics.push(Relic {
            id: crate::state::ItemId(9),
            base_def: Some(15),
            ..Relic::default()
        });
        refresh(&mut state);
        assert_eq!(state.player_stats.def, 10 + 15);
    }
}
