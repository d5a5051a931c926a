//! Command rejection errors.
//!
//! Every variant is a precondition failure: the store treats them as
//! silent no-ops (prior state retained, error returned as a value).

use crate::env::OracleError;
use crate::state::types::ItemId;

/// Why a command was rejected. The document is untouched whenever one of
/// these is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Not in combat")]
    NotInCombat,

    #[error("Already in combat")]
    AlreadyInCombat,

    #[error("Insufficient coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u64, available: u64 },

    #[error("Insufficient gems: need {needed}, have {available}")]
    InsufficientGems { needed: u64, available: u64 },

    #[error("Insufficient shiny gems: need {needed}, have {available}")]
    InsufficientShinyGems { needed: u64, available: u64 },

    #[error("Insufficient fragments: need {needed}, have {available}")]
    InsufficientFragments { needed: u32, available: u32 },

    #[error("No skill points available")]
    NoSkillPoints,

    #[error("Skill already unlocked")]
    SkillAlreadyUnlocked,

    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    #[error("Relic {0} not found")]
    RelicNotFound(ItemId),

    #[error("Item {0} is currently equipped")]
    ItemEquipped(ItemId),

    #[error("Garden already planted")]
    GardenAlreadyPlanted,

    #[error("Garden not planted")]
    GardenNotPlanted,

    #[error("No daily reward available")]
    NoDailyReward,

    #[error("Nothing to claim")]
    NothingToClaim,

    #[error("Level {current} below required {required}")]
    LevelTooLow { required: u32, current: u32 },

    #[error("No merchant rewards pending")]
    NoMerchantMenu,

    #[error("Reward selection out of range")]
    InvalidSelection,

    #[error("No adventure skill offer to respond to")]
    NoAdventureSkillOffer,

    #[error("Skip card is not available")]
    SkipCardUnavailable,

    #[error("Target zone is behind the current zone")]
    ZoneBehindCurrent,

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}
