//! Deterministic trivia-RPG rules and data types shared across clients.
//!
//! `mindspire-core` defines the canonical save document, the closed
//! command set, and the derived-stat rules, exposed as pure APIs the
//! runtime and offline tools reuse. All state mutation flows through
//! [`engine::GameEngine`]; everything external (content generation,
//! randomness, the wall clock) arrives through the oracle traits in
//! [`env`].
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use command::{
    AttackOutcome, ChestItem, ChestReward, Command, CommandOutcome, MineOutcome,
};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use env::{
    ClockOracle, ContentOracle, FixedClock, GameEnv, OracleError, PcgRng, RarityWeights,
    RngOracle, compute_seed,
};
pub use error::CommandError;
pub use state::{
    ActiveMenuSkill, AdventureSkillKind, AdventureSkills, Armor, CheatKind, Cheats,
    CollectionBook, DailyReward, DailyRewards, Enemy, GameMode, GameState, GardenOfGrowth,
    Inventory, ItemId, ItemKind, KnowledgeStreak, MenuSkillKind, MenuSkills, Merchant,
    MerchantReward, Mining, ModeKind, Multipliers, OfflineProgress, PlayerStats, Progression,
    Rarity, Relic, Research, ResearchBonuses, Settings, Statistics, Timestamp, Weapon,
    YojefMarket,
};
