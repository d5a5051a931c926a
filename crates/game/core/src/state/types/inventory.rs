//! Owned item collections and equipment references.

use serde::{Deserialize, Serialize};

use crate::state::types::common::ItemId;
use crate::state::types::item::{Armor, Relic, Weapon};

/// Everything the player owns.
///
/// Invariants, maintained by the command layer:
/// - `current_weapon_id` / `current_armor_id`, when set, resolve into the
///   respective collection.
/// - A relic lives in exactly one of `relics` (owned, unequipped) or
///   `equipped_relics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub weapons: Vec<Weapon>,
    pub armor: Vec<Armor>,
    pub relics: Vec<Relic>,
    pub equipped_relics: Vec<Relic>,
    pub current_weapon_id: Option<ItemId>,
    pub current_armor_id: Option<ItemId>,
}

impl Inventory {
    pub fn weapon(&self, id: ItemId) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    pub fn weapon_mut(&mut self, id: ItemId) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.id == id)
    }

    pub fn armor(&self, id: ItemId) -> Option<&Armor> {
        self.armor.iter().find(|a| a.id == id)
    }

    pub fn armor_mut(&mut self, id: ItemId) -> Option<&mut Armor> {
        self.armor.iter_mut().find(|a| a.id == id)
    }

    pub fn current_weapon(&self) -> Option<&Weapon> {
        self.current_weapon_id.and_then(|id| self.weapon(id))
    }

    pub fn current_armor(&self) -> Option<&Armor> {
        self.current_armor_id.and_then(|id| self.armor(id))
    }

    pub fn is_weapon_equipped(&self, id: ItemId) -> bool {
        self.current_weapon_id == Some(id)
    }

    pub fn is_armor_equipped(&self, id: ItemId) -> bool {
        self.current_armor_id == Some(id)
    }

    pub fn owned_relic(&self, id: ItemId) -> Option<&Relic> {
        self.relics.iter().find(|r| r.id == id)
    }

    pub fn equipped_relic(&self, id: ItemId) -> Option<&Relic> {
        self.equipped_relics.iter().find(|r| r.id == id)
    }

    /// Looks up a relic in either owned list.
    pub fn relic_mut(&mut self, id: ItemId) -> Option<&mut Relic> {
        self.relics
            .iter_mut()
            .chain(self.equipped_relics.iter_mut())
            .find(|r| r.id == id)
    }
}
