//! The state store: owns the canonical document and applies commands.
//!
//! Dispatch is clone-execute-commit: each command runs against a clone of
//! the document, and the clone replaces the original only on success, so
//! a rejected or failed command can never leave partial mutations behind.
//! Every accepted command schedules a fire-and-forget persist of a
//! snapshot taken at commit time.

use std::sync::Arc;

use mindspire_core::{
    AdventureSkillKind, CheatKind, ChestReward, ClockOracle, Command, CommandError,
    CommandOutcome, ContentOracle, DailyReward, GameEngine, GameEnv, GameState, ItemId, ItemKind,
    MerchantReward, MineOutcome, ModeKind, RngOracle, Settings,
};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::StoreError;
use crate::repository::{SAVE_KEY, SaveRepository};
use crate::save;
use crate::workers::spawn_persistence_worker;

/// Owns the live [`GameState`] and the oracle set, and exposes the
/// public operation surface as named methods.
pub struct GameStore {
    state: GameState,
    content: Arc<dyn ContentOracle>,
    rng: Arc<dyn RngOracle>,
    clock: Arc<dyn ClockOracle>,
    snapshot_tx: tokio::sync::mpsc::UnboundedSender<GameState>,
    persist_handle: JoinHandle<()>,
}

impl GameStore {
    /// Loads the save (or installs defaults), accrues offline progress,
    /// and spawns the persistence worker.
    pub async fn open(
        repo: Arc<dyn SaveRepository>,
        content: Arc<dyn ContentOracle>,
        rng: Arc<dyn RngOracle>,
        clock: Arc<dyn ClockOracle>,
    ) -> Result<Self, StoreError> {
        let fallback_seed = rand::random();
        let mut state = match repo.get(SAVE_KEY).await? {
            Some(blob) => save::decode_or_default(&blob, fallback_seed),
            None => GameState::with_seed(fallback_seed),
        };

        save::accrue_offline_progress(&mut state, clock.now());

        let (snapshot_tx, persist_handle) = spawn_persistence_worker(repo);

        let store = Self {
            state,
            content,
            rng,
            clock,
            snapshot_tx,
            persist_handle,
        };
        store.schedule_persist();
        Ok(store)
    }

    /// Read access for the UI and the achievement/tag evaluators.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one command with the at-most-once-effect guarantee.
    ///
    /// Rejections come back as values; the document is untouched and
    /// nothing is persisted for them.
    pub fn dispatch(&mut self, command: &Command) -> Result<CommandOutcome, CommandError> {
        let mut next = self.state.clone();
        let env = GameEnv::with_all(
            self.content.as_ref(),
            self.rng.as_ref(),
            self.clock.as_ref(),
        );

        let mut engine = GameEngine::new(&mut next);
        match engine.execute(env, command) {
            Ok(outcome) => {
                self.state = next;
                self.schedule_persist();
                Ok(outcome)
            }
            Err(error) => {
                debug!(?command, %error, "Command rejected");
                Err(error)
            }
        }
    }

    /// Sends a snapshot taken now; later mutations cannot affect it.
    fn schedule_persist(&self) {
        let _ = self.snapshot_tx.send(self.state.clone());
    }

    /// Drops the snapshot channel and waits for queued saves to land.
    pub async fn shutdown(self) {
        let Self {
            snapshot_tx,
            persist_handle,
            ..
        } = self;
        drop(snapshot_tx);
        let _ = persist_handle.await;
    }

    // ------------------------------------------------------------------
    // Combat
    // ------------------------------------------------------------------

    pub fn start_combat(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::StartCombat).map(|_| ())
    }

    pub fn attack(
        &mut self,
        hit: bool,
        category: Option<String>,
    ) -> Result<mindspire_core::AttackOutcome, CommandError> {
        match self.dispatch(&Command::Attack { hit, category })? {
            CommandOutcome::Attack(outcome) => Ok(outcome),
            _ => Ok(mindspire_core::AttackOutcome::default()),
        }
    }

    // ------------------------------------------------------------------
    // Economy & inventory
    // ------------------------------------------------------------------

    pub fn equip_weapon(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::EquipWeapon { id }).map(|_| ())
    }

    pub fn equip_armor(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::EquipArmor { id }).map(|_| ())
    }

    pub fn upgrade_weapon(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::UpgradeWeapon { id }).map(|_| ())
    }

    pub fn upgrade_armor(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::UpgradeArmor { id }).map(|_| ())
    }

    pub fn sell_weapon(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::SellWeapon { id }).map(|_| ())
    }

    pub fn sell_armor(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::SellArmor { id }).map(|_| ())
    }

    pub fn discard_item(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::DiscardItem { id }).map(|_| ())
    }

    /// Opens a chest, returning the reward for display.
    pub fn open_chest(&mut self, cost: u64) -> Result<ChestReward, CommandError> {
        match self.dispatch(&Command::OpenChest { cost })? {
            CommandOutcome::Chest(reward) => Ok(reward),
            _ => Err(CommandError::InvalidAmount),
        }
    }

    pub fn bulk_sell(&mut self, kind: ItemKind, ids: Vec<ItemId>) -> Result<(), CommandError> {
        self.dispatch(&Command::BulkSell { kind, ids }).map(|_| ())
    }

    pub fn bulk_upgrade(&mut self, kind: ItemKind, ids: Vec<ItemId>) -> Result<(), CommandError> {
        self.dispatch(&Command::BulkUpgrade { kind, ids })
            .map(|_| ())
    }

    pub fn purchase_mythical(&mut self) -> Result<ChestReward, CommandError> {
        match self.dispatch(&Command::PurchaseMythical)? {
            CommandOutcome::Chest(reward) => Ok(reward),
            _ => Err(CommandError::InvalidAmount),
        }
    }

    // ------------------------------------------------------------------
    // Relics
    // ------------------------------------------------------------------

    pub fn purchase_relic(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::PurchaseRelic { id }).map(|_| ())
    }

    pub fn upgrade_relic(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::UpgradeRelic { id }).map(|_| ())
    }

    pub fn equip_relic(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::EquipRelic { id }).map(|_| ())
    }

    pub fn unequip_relic(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::UnequipRelic { id }).map(|_| ())
    }

    pub fn sell_relic(&mut self, id: ItemId) -> Result<(), CommandError> {
        self.dispatch(&Command::SellRelic { id }).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Garden
    // ------------------------------------------------------------------

    pub fn plant_seed(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::PlantSeed).map(|_| ())
    }

    pub fn buy_water(&mut self, hours: u32) -> Result<(), CommandError> {
        self.dispatch(&Command::BuyWater { hours }).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Daily rewards
    // ------------------------------------------------------------------

    /// Scheduler entry point: stocks the claimable reward.
    pub fn offer_daily_reward(&mut self, reward: DailyReward) -> Result<(), CommandError> {
        self.dispatch(&Command::OfferDailyReward { reward })
            .map(|_| ())
    }

    pub fn claim_daily_reward(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::ClaimDailyReward).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Progression
    // ------------------------------------------------------------------

    pub fn upgrade_skill(&mut self, skill_id: String) -> Result<(), CommandError> {
        self.dispatch(&Command::UpgradeSkill { skill_id }).map(|_| ())
    }

    pub fn prestige(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::Prestige).map(|_| ())
    }

    pub fn claim_offline_rewards(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::ClaimOfflineRewards).map(|_| ())
    }

    pub fn set_experience(&mut self, value: u64) -> Result<(), CommandError> {
        self.dispatch(&Command::SetExperience { value }).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Merchant
    // ------------------------------------------------------------------

    pub fn spend_fragments(&mut self) -> Result<Vec<MerchantReward>, CommandError> {
        match self.dispatch(&Command::SpendFragments)? {
            CommandOutcome::MerchantMenu(menu) => Ok(menu),
            _ => Ok(Vec::new()),
        }
    }

    pub fn select_merchant_reward(&mut self, index: usize) -> Result<(), CommandError> {
        self.dispatch(&Command::SelectMerchantReward { index })
            .map(|_| ())
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    pub fn roll_skill(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::RollSkill).map(|_| ())
    }

    pub fn select_adventure_skill(&mut self, kind: AdventureSkillKind) -> Result<(), CommandError> {
        self.dispatch(&Command::SelectAdventureSkill { kind })
            .map(|_| ())
    }

    pub fn skip_adventure_skills(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::SkipAdventureSkills).map(|_| ())
    }

    pub fn use_skip_card(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::UseSkipCard).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Mining & exchange
    // ------------------------------------------------------------------

    pub fn mine(&mut self) -> Result<MineOutcome, CommandError> {
        match self.dispatch(&Command::Mine)? {
            CommandOutcome::Mine(outcome) => Ok(outcome),
            _ => Ok(MineOutcome { shiny: false }),
        }
    }

    pub fn exchange_shiny_gems(&mut self, amount: u64) -> Result<(), CommandError> {
        self.dispatch(&Command::ExchangeShinyGems { amount })
            .map(|_| ())
    }

    // ------------------------------------------------------------------
    // Mode, cheats, settings, dev tools
    // ------------------------------------------------------------------

    /// Discards the document and recreates defaults under a fresh seed.
    pub fn reset(&mut self) -> Result<(), CommandError> {
        self.dispatch(&Command::Reset {
            new_seed: rand::random(),
        })
        .map(|_| ())
    }

    pub fn set_game_mode(&mut self, mode: ModeKind) -> Result<(), CommandError> {
        self.dispatch(&Command::SetGameMode { mode }).map(|_| ())
    }

    pub fn toggle_cheat(&mut self, cheat: CheatKind) -> Result<(), CommandError> {
        self.dispatch(&Command::ToggleCheat { cheat }).map(|_| ())
    }

    pub fn update_settings(&mut self, settings: Settings) -> Result<(), CommandError> {
        self.dispatch(&Command::UpdateSettings { settings })
            .map(|_| ())
    }

    pub fn add_coins(&mut self, amount: u64) -> Result<(), CommandError> {
        self.dispatch(&Command::AddCoins { amount }).map(|_| ())
    }

    pub fn add_gems(&mut self, amount: u64) -> Result<(), CommandError> {
        self.dispatch(&Command::AddGems { amount }).map(|_| ())
    }

    pub fn teleport_to_zone(&mut self, zone: u32) -> Result<(), CommandError> {
        self.dispatch(&Command::TeleportToZone { zone }).map(|_| ())
    }
}
