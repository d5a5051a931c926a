//! Default deterministic content generators.
//!
//! Everything is a pure function of the seed the engine hands over, so a
//! replayed save regenerates identical content. The engine allocates item
//! ids; generators never invent their own.

use mindspire_core::{
    Armor, ContentOracle, Enemy, ItemId, PcgRng, Rarity, RarityWeights, Relic, RngOracle, Weapon,
    compute_seed,
};

use crate::names;

/// Independent sub-roll within one generation call.
fn sub_seed(seed: u64, context: u32) -> u64 {
    compute_seed(seed, 0, context)
}

/// Rarity weights used when the caller lets the generator pick.
const DROP_WEIGHTS: RarityWeights = [55, 25, 12, 6, 2];

/// Base stat bounds per rarity tier: (min, max).
fn weapon_atk_range(rarity: Rarity) -> (u32, u32) {
    match rarity {
        Rarity::Common => (12, 20),
        Rarity::Rare => (22, 35),
        Rarity::Epic => (38, 55),
        Rarity::Legendary => (60, 85),
        Rarity::Mythical => (90, 130),
    }
}

fn armor_def_range(rarity: Rarity) -> (u32, u32) {
    match rarity {
        Rarity::Common => (6, 12),
        Rarity::Rare => (14, 22),
        Rarity::Epic => (25, 38),
        Rarity::Legendary => (40, 60),
        Rarity::Mythical => (65, 95),
    }
}

fn upgrade_cost(rarity: Rarity) -> u64 {
    match rarity {
        Rarity::Common => 10,
        Rarity::Rare => 25,
        Rarity::Epic => 50,
        Rarity::Legendary => 100,
        Rarity::Mythical => 200,
    }
}

fn sell_multiplier(rarity: Rarity) -> u64 {
    match rarity {
        Rarity::Common => 2,
        Rarity::Rare => 4,
        Rarity::Epic => 8,
        Rarity::Legendary => 15,
        Rarity::Mythical => 30,
    }
}

/// The stock generator set. Stateless; the surrounding application can
/// swap in its own [`ContentOracle`] without touching the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultContent {
    rng: PcgRng,
}

impl DefaultContent {
    pub fn new() -> Self {
        Self::default()
    }

    fn pick_rarity(&self, seed: u64) -> Rarity {
        let roll = self.rng.roll_d100(sub_seed(seed, 0));
        let mut cumulative = 0;
        for (tier, weight) in Rarity::ALL.iter().zip(DROP_WEIGHTS) {
            cumulative += weight;
            if roll <= cumulative {
                return *tier;
            }
        }
        Rarity::Mythical
    }

    fn pick_name(&self, seed: u64, table: &[&str], rarity: Rarity) -> String {
        let index = self.rng.range(sub_seed(seed, 1), 0, table.len() as u32 - 1) as usize;
        format!("{}{}", names::rarity_prefix(rarity), table[index])
    }
}

impl ContentOracle for DefaultContent {
    fn generate_weapon(&self, id: ItemId, seed: u64, rarity: Option<Rarity>) -> Weapon {
        let rarity = rarity.unwrap_or_else(|| self.pick_rarity(seed));
        let (min, max) = weapon_atk_range(rarity);
        let base_atk = self.rng.range(sub_seed(seed, 2), min, max);

        Weapon {
            id,
            name: self.pick_name(seed, names::WEAPON_NAMES, rarity),
            rarity,
            base_atk,
            level: 1,
            upgrade_cost: upgrade_cost(rarity),
            sell_price: u64::from(base_atk) * sell_multiplier(rarity),
        }
    }

    fn generate_armor(&self, id: ItemId, seed: u64, rarity: Option<Rarity>) -> Armor {
        let rarity = rarity.unwrap_or_else(|| self.pick_rarity(seed));
        let (min, max) = armor_def_range(rarity);
        let base_def = self.rng.range(sub_seed(seed, 2), min, max);

        Armor {
            id,
            name: self.pick_name(seed, names::ARMOR_NAMES, rarity),
            rarity,
            base_def,
            level: 1,
            upgrade_cost: upgrade_cost(rarity),
            sell_price: u64::from(base_def) * sell_multiplier(rarity),
        }
    }

    fn generate_enemy(&self, seed: u64, zone: u32) -> Enemy {
        let index = self
            .rng
            .range(sub_seed(seed, 3), 0, names::ENEMY_NAMES.len() as u32 - 1)
            as usize;
        // Small per-encounter variance on top of the zone scaling curve.
        let hp_jitter = self.rng.range(sub_seed(seed, 4), 0, zone * 2);
        let hp = 40 + zone * 15 + hp_jitter;

        Enemy {
            name: names::ENEMY_NAMES[index].to_owned(),
            zone,
            hp,
            max_hp: hp,
            atk: 8 + zone * 3,
            def: 2 + zone * 2,
        }
    }

    fn generate_relic(&self, id: ItemId, seed: u64) -> Relic {
        let offensive = self.rng.flip(sub_seed(seed, 5));
        let index = self
            .rng
            .range(sub_seed(seed, 1), 0, names::RELIC_NAMES.len() as u32 - 1)
            as usize;
        let cost = u64::from(self.rng.range(sub_seed(seed, 6), 120, 200));

        let (base_atk, base_def, description) = if offensive {
            let atk = self.rng.range(sub_seed(seed, 7), 120, 180);
            (Some(atk), None, format!("+{atk} attack while equipped"))
        } else {
            let def = self.rng.range(sub_seed(seed, 7), 90, 140);
            (None, Some(def), format!("+{def} defense while equipped"))
        };

        Relic {
            id,
            name: names::RELIC_NAMES[index].to_owned(),
            description,
            base_atk,
            base_def,
            level: 1,
            cost,
            upgrade_cost: 50,
        }
    }

    fn chest_rarity_weights(&self, cost: u64) -> RarityWeights {
        match cost {
            1000.. => [25, 35, 20, 15, 5],
            400.. => [40, 35, 15, 8, 2],
            200.. => [55, 30, 10, 4, 1],
            _ => [70, 25, 4, 1, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let content = DefaultContent::new();
        let a = content.generate_weapon(ItemId(1), 42, None);
        let b = content.generate_weapon(ItemId(1), 42, None);
        assert_eq!(a, b);

        let c = content.generate_weapon(ItemId(1), 43, None);
        // Different seeds are allowed to collide on any single field, but
        // a full-struct collision would mean the seed is being ignored.
        assert!(a.base_atk != c.base_atk || a.name != c.name || a.rarity != c.rarity);
    }

    #[test]
    fn forced_rarity_is_respected_with_stats_in_band() {
        let content = DefaultContent::new();
        for rarity in Rarity::iter() {
            for seed in 0..50 {
                let weapon = content.generate_weapon(ItemId(1), seed, Some(rarity));
                assert_eq!(weapon.rarity, rarity);
                let (min, max) = weapon_atk_range(rarity);
                assert!((min..=max).contains(&weapon.base_atk));

                let armor = content.generate_armor(ItemId(1), seed, Some(rarity));
                let (min, max) = armor_def_range(rarity);
                assert!((min..=max).contains(&armor.base_def));
            }
        }
    }

    #[test]
    fn chest_weights_sum_to_one_hundred_per_tier() {
        let content = DefaultContent::new();
        for cost in [0, 100, 199, 200, 399, 400, 999, 1000, 5000] {
            let weights = content.chest_rarity_weights(cost);
            assert_eq!(weights.iter().sum::<u32>(), 100, "cost tier {cost}");
        }
    }

    #[test]
    fn pricier_chests_shift_weight_upward() {
        let content = DefaultContent::new();
        let basic = content.chest_rarity_weights(100);
        let premium = content.chest_rarity_weights(1000);
        assert!(premium[0] < basic[0]);
        assert!(premium[3] + premium[4] > basic[3] + basic[4]);
    }

    #[test]
    fn enemies_scale_with_zone() {
        let content = DefaultContent::new();
        let shallow = content.generate_enemy(7, 1);
        let deep = content.generate_enemy(7, 30);
        assert!(deep.hp > shallow.hp);
        assert!(deep.atk > shallow.atk);
        assert!(deep.def > shallow.def);
        assert_eq!(deep.hp, deep.max_hp);
    }

    #[test]
    fn relics_define_exactly_one_stat() {
        let content = DefaultContent::new();
        for seed in 0..100 {
            let relic = content.generate_relic(ItemId(1), seed);
            assert!(relic.base_atk.is_some() ^ relic.base_def.is_some());
        }
    }
}
