//! Fragment merchant: spend fragments, pick one of three rolled rewards.

use serde::{Deserialize, Serialize};

use crate::state::types::item::{Armor, Weapon};

/// One option on a rolled reward menu. Items are fully formed at roll
/// time so the menu can be rendered without another generator call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerchantReward {
    Coins { amount: u64 },
    Gems { amount: u64 },
    LegendaryWeapon(Weapon),
    LegendaryArmor(Armor),
}

/// Merchant state. A non-empty `pending_rewards` means a menu is open and
/// awaiting [`crate::command::Command::SelectMerchantReward`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Merchant {
    pub fragments: u32,
    pub total_fragments_earned: u32,
    pub pending_rewards: Vec<MerchantReward>,
}
