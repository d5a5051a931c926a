//! Owned item types: weapons, armor, and relics.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::GameConfig;
use crate::state::types::common::ItemId;

/// Item rarity tiers, ascending power/value order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    /// All tiers in the fixed order chest weight tables use.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];
}

/// Offensive equipment. `base_atk` is the unleveled stat; the level bonus is
/// computed, never baked in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weapon {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    pub base_atk: u32,
    pub level: u32,
    /// Gems required for the next upgrade.
    pub upgrade_cost: u64,
    /// Coins credited when sold.
    pub sell_price: u64,
}

impl Weapon {
    /// Flat attack contributed while equipped.
    pub fn equip_bonus(&self) -> u32 {
        self.base_atk + (self.level.saturating_sub(1)) * GameConfig::WEAPON_LEVEL_ATK
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            name: String::new(),
            rarity: Rarity::Common,
            base_atk: 0,
            level: 1,
            upgrade_cost: 0,
            sell_price: 0,
        }
    }
}

/// Defensive equipment, mirror of [`Weapon`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Armor {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    pub base_def: u32,
    pub level: u32,
    pub upgrade_cost: u64,
    pub sell_price: u64,
}

impl Armor {
    /// Flat defense contributed while equipped.
    pub fn equip_bonus(&self) -> u32 {
        self.base_def + (self.level.saturating_sub(1)) * GameConfig::ARMOR_LEVEL_DEF
    }
}

impl Default for Armor {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            name: String::new(),
            rarity: Rarity::Common,
            base_def: 0,
            level: 1,
            upgrade_cost: 0,
            sell_price: 0,
        }
    }
}

/// Equippable bonus item sourced from the Yojef Market.
///
/// A relic defines exactly one of its two stats: `base_atk` for attack
/// relics, `base_def` for defense relics. The unset stat stays `None`
/// through upgrades.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relic {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub base_atk: Option<u32>,
    pub base_def: Option<u32>,
    pub level: u32,
    /// Gem price in the market; also the basis for the sell refund.
    pub cost: u64,
    /// Gems required for the next upgrade.
    pub upgrade_cost: u64,
}

impl Default for Relic {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            name: String::new(),
            description: String::new(),
            base_atk: None,
            base_def: None,
            level: 1,
            cost: 0,
            upgrade_cost: 0,
        }
    }
}

/// Which owned-item collection an id refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
}
