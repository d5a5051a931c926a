//! Authoritative game state representation.
//!
//! This module owns the single root aggregate and its sub-objects. The
//! runtime clones or queries this state but mutates it exclusively through
//! the command engine.
pub mod types;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
pub use types::{
    ActiveMenuSkill, AdventureSkillEffects, AdventureSkillKind, AdventureSkills, Armor,
    CategoryAccuracy, CheatKind, Cheats, CollectionBook, DailyReward, DailyRewards, Enemy,
    GameMode, GardenOfGrowth, Inventory, ItemId, ItemKind, KnowledgeStreak, MenuSkillKind,
    MenuSkills, Merchant, MerchantReward, Mining, ModeKind, Multipliers, OfflineProgress,
    PlayerStats, Progression, Rarity, RarityCounts, Relic, Research, ResearchBonuses, Settings,
    Statistics, Timestamp, Weapon, YojefMarket, level_for,
};

/// Canonical save document for one player.
///
/// Exclusively owned by the store; every mutation flows through
/// [`crate::engine::GameEngine`]. All containers carry `#[serde(default)]`
/// so saves written by older versions back-fill new fields from defaults
/// when loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    /// RNG seed fixed at game creation. Combined with `nonce` to derive a
    /// unique seed for every random roll.
    pub game_seed: u64,

    /// Count of accepted commands. Incremented exactly once per accepted
    /// command, never by rejected ones.
    pub nonce: u64,

    /// Sequential item id allocator (monotonically increasing, never
    /// reused).
    next_item_id: u64,

    pub coins: u64,
    pub gems: u64,
    pub shiny_gems: u64,

    /// Progression depth; gates enemy difficulty and reward scaling.
    /// Monotonically non-decreasing.
    pub zone: u32,

    pub player_stats: PlayerStats,
    pub inventory: Inventory,

    pub current_enemy: Option<Enemy>,
    pub in_combat: bool,
    /// Free-revival flag for the current life; cleared on victory.
    pub revival_used: bool,
    pub combat_log: Vec<String>,

    pub knowledge_streak: KnowledgeStreak,
    pub collection_book: CollectionBook,
    pub statistics: Statistics,

    pub research: Research,
    pub garden_of_growth: GardenOfGrowth,
    pub multipliers: Multipliers,

    pub daily_rewards: DailyRewards,
    pub progression: Progression,
    pub offline_progress: OfflineProgress,
    pub merchant: Merchant,
    pub skills: MenuSkills,
    pub adventure_skills: AdventureSkills,
    pub yojef_market: YojefMarket,
    pub mining: Mining,
    pub game_mode: GameMode,
    pub cheats: Cheats,
    pub settings: Settings,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl GameState {
    /// Creates a fresh save with deterministic defaults and the given seed.
    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            next_item_id: 1,
            coins: 100,
            gems: 0,
            shiny_gems: 0,
            zone: 1,
            player_stats: PlayerStats::default(),
            inventory: Inventory::default(),
            current_enemy: None,
            in_combat: false,
            revival_used: false,
            combat_log: Vec::new(),
            knowledge_streak: KnowledgeStreak::default(),
            collection_book: CollectionBook::default(),
            statistics: Statistics::default(),
            research: Research::default(),
            garden_of_growth: GardenOfGrowth::default(),
            multipliers: Multipliers::default(),
            daily_rewards: DailyRewards::default(),
            progression: Progression::default(),
            offline_progress: OfflineProgress::default(),
            merchant: Merchant::default(),
            skills: MenuSkills::default(),
            adventure_skills: AdventureSkills::default(),
            yojef_market: YojefMarket::default(),
            mining: Mining::default(),
            game_mode: GameMode::default(),
            cheats: Cheats::default(),
            settings: Settings::default(),
        }
    }

    /// Combat is active iff an enemy is present and the flag agrees.
    pub fn combat_active(&self) -> bool {
        self.in_combat && self.current_enemy.is_some()
    }

    /// Allocates a new unique [`ItemId`].
    pub fn allocate_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id = self.next_item_id.wrapping_add(1).max(1);
        id
    }

    /// Appends a combat log entry, retaining only the most recent
    /// [`GameConfig::COMBAT_LOG_LIMIT`] entries.
    pub fn push_combat_log(&mut self, entry: String) {
        self.combat_log.push(entry);
        let overflow = self
            .combat_log
            .len()
            .saturating_sub(GameConfig::COMBAT_LOG_LIMIT);
        if overflow > 0 {
            self.combat_log.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combat_log_is_fifo_bounded() {
        let mut state = GameState::default();
        for i in 0..25 {
            state.push_combat_log(format!("entry {i}"));
        }
        assert_eq!(state.combat_log.len(), GameConfig::COMBAT_LOG_LIMIT);
        assert_eq!(state.combat_log.first().unwrap(), "entry 15");
        assert_eq!(state.combat_log.last().unwrap(), "entry 24");
    }

    #[test]
    fn item_ids_are_unique_and_monotonic() {
        let mut state = GameState::default();
        let a = state.allocate_item_id();
        let b = state.allocate_item_id();
        assert!(b > a);
    }

    #[test]
    fn missing_fields_backfill_from_defaults() {
        // A save written before most subsystems existed.
        let blob = r#"{"coins": 777, "zone": 9}"#;
        let state: GameState = serde_json::from_str(blob).unwrap();
        assert_eq!(state.coins, 777);
        assert_eq!(state.zone, 9);
        assert_eq!(state.gems, 0);
        assert_eq!(state.player_stats, PlayerStats::default());
        assert!(state.yojef_market.items.is_empty());
        assert_eq!(state.game_mode, GameMode::default());
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = GameState::with_seed(42);
        state.coins = 12345;
        state.garden_of_growth.is_planted = true;
        state.garden_of_growth.planted_at = Some(Timestamp::from_millis(1_700_000_000_000));
        let blob = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, state);
    }
}
