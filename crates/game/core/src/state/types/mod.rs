//! State sub-object types, one file per concern.

mod bonuses;
mod collection;
mod common;
mod daily;
mod inventory;
mod item;
mod market;
mod merchant;
mod mining;
mod mode;
mod player;
mod progression;
mod skills;
mod statistics;
mod streak;

pub use bonuses::{GardenOfGrowth, Multipliers, Research, ResearchBonuses};
pub use collection::{CollectionBook, RarityCounts};
pub use common::{ItemId, Timestamp};
pub use daily::{DailyReward, DailyRewards};
pub use inventory::Inventory;
pub use item::{Armor, ItemKind, Rarity, Relic, Weapon};
pub use market::YojefMarket;
pub use merchant::{Merchant, MerchantReward};
pub use mining::Mining;
pub use mode::{CheatKind, Cheats, GameMode, ModeKind, Settings};
pub use player::{Enemy, PlayerStats};
pub use progression::{OfflineProgress, Progression, level_for};
pub use skills::{
    ActiveMenuSkill, AdventureSkillEffects, AdventureSkillKind, AdventureSkills, MenuSkillKind,
    MenuSkills,
};
pub use statistics::{CategoryAccuracy, Statistics};
pub use streak::KnowledgeStreak;
