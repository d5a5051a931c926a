//! Command domain: the closed set of state transitions.
//!
//! Every player-visible operation is a [`Command`] variant mapping
//! `(state, payload) -> state'`. Commands either complete fully or return
//! a [`CommandError`] with the state untouched; the store layers its
//! clone-and-commit guarantee on top. Guard checks and mutation happen
//! inside the same function, so there is no window where a stale snapshot
//! can diverge from the state being mutated.

mod chest;
mod combat;
mod daily;
mod garden;
mod inventory;
mod merchant;
mod mining;
mod progression;
mod relic;
mod skills;
mod system;

pub use chest::{ChestItem, ChestReward};
pub use combat::AttackOutcome;
pub use mining::MineOutcome;

use serde::{Deserialize, Serialize};

use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::{
    ActiveMenuSkill, AdventureSkillKind, CheatKind, DailyReward, ItemId, ItemKind, MerchantReward,
    ModeKind, Settings,
};

/// Every mutating operation the engine accepts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    // Combat
    StartCombat,
    Attack { hit: bool, category: Option<String> },

    // Economy & inventory
    EquipWeapon { id: ItemId },
    EquipArmor { id: ItemId },
    UpgradeWeapon { id: ItemId },
    UpgradeArmor { id: ItemId },
    SellWeapon { id: ItemId },
    SellArmor { id: ItemId },
    DiscardItem { id: ItemId },
    OpenChest { cost: u64 },
    BulkSell { kind: ItemKind, ids: Vec<ItemId> },
    BulkUpgrade { kind: ItemKind, ids: Vec<ItemId> },
    PurchaseMythical,

    // Relics (Yojef Market)
    PurchaseRelic { id: ItemId },
    UpgradeRelic { id: ItemId },
    EquipRelic { id: ItemId },
    UnequipRelic { id: ItemId },
    SellRelic { id: ItemId },

    // Garden of Growth
    PlantSeed,
    BuyWater { hours: u32 },

    // Daily rewards
    OfferDailyReward { reward: DailyReward },
    ClaimDailyReward,

    // Progression
    UpgradeSkill { skill_id: String },
    Prestige,
    ClaimOfflineRewards,
    SetExperience { value: u64 },

    // Merchant
    SpendFragments,
    SelectMerchantReward { index: usize },

    // Skills
    RollSkill,
    SelectAdventureSkill { kind: AdventureSkillKind },
    SkipAdventureSkills,
    UseSkipCard,

    // Mining & exchange
    Mine,
    ExchangeShinyGems { amount: u64 },

    // Mode, cheats, settings, dev tools
    Reset { new_seed: u64 },
    SetGameMode { mode: ModeKind },
    ToggleCheat { cheat: CheatKind },
    UpdateSettings { settings: Settings },
    AddCoins { amount: u64 },
    AddGems { amount: u64 },
    TeleportToZone { zone: u32 },
}

/// Command-specific result handed back to the caller for display.
/// `None` for operations whose effect is fully visible in the state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    None,
    Attack(AttackOutcome),
    Chest(ChestReward),
    Mine(MineOutcome),
    MerchantMenu(Vec<MerchantReward>),
    SkillRolled(ActiveMenuSkill),
}

/// Routes a command to its transition. Called only by the engine.
pub(crate) fn execute(
    state: &mut GameState,
    env: &GameEnv<'_>,
    command: &Command,
) -> Result<CommandOutcome, CommandError> {
    match command {
        Command::StartCombat => combat::start_combat(state, env),
        Command::Attack { hit, category } => {
            combat::attack(state, *hit, category.as_deref())
        }

        Command::EquipWeapon { id } => inventory::equip_weapon(state, *id),
        Command::EquipArmor { id } => inventory::equip_armor(state, *id),
        Command::UpgradeWeapon { id } => inventory::upgrade_weapon(state, *id),
        Command::UpgradeArmor { id } => inventory::upgrade_armor(state, *id),
        Command::SellWeapon { id } => inventory::sell_weapon(state, *id),
        Command::SellArmor { id } => inventory::sell_armor(state, *id),
        Command::DiscardItem { id } => inventory::discard_item(state, *id),
        Command::OpenChest { cost } => chest::open_chest(state, env, *cost),
        Command::BulkSell { kind, ids } => inventory::bulk_sell(state, *kind, ids),
        Command::BulkUpgrade { kind, ids } => inventory::bulk_upgrade(state, *kind, ids),
        Command::PurchaseMythical => chest::purchase_mythical(state, env),

        Command::PurchaseRelic { id } => relic::purchase(state, *id),
        Command::UpgradeRelic { id } => relic::upgrade(state, *id),
        Command::EquipRelic { id } => relic::equip(state, *id),
        Command::UnequipRelic { id } => relic::unequip(state, *id),
        Command::SellRelic { id } => relic::sell(state, *id),

        Command::PlantSeed => garden::plant_seed(state, env),
        Command::BuyWater { hours } => garden::buy_water(state, *hours),

        Command::OfferDailyReward { reward } => daily::offer(state, reward.clone()),
        Command::ClaimDailyReward => daily::claim(state, env),

        Command::UpgradeSkill { skill_id } => progression::upgrade_skill(state, skill_id),
        Command::Prestige => progression::prestige(state),
        Command::ClaimOfflineRewards => progression::claim_offline_rewards(state),
        Command::SetExperience { value } => progression::set_experience(state, *value),

        Command::SpendFragments => merchant::spend_fragments(state, env),
        Command::SelectMerchantReward { index } => merchant::select_reward(state, *index),

        Command::RollSkill => skills::roll_skill(state, env),
        Command::SelectAdventureSkill { kind } => skills::select_adventure_skill(state, *kind),
        Command::SkipAdventureSkills => skills::skip_adventure_skills(state),
        Command::UseSkipCard => skills::use_skip_card(state),

        Command::Mine => mining::mine(state, env),
        Command::ExchangeShinyGems { amount } => mining::exchange_shiny_gems(state, *amount),

        Command::Reset { new_seed } => system::reset(state, *new_seed),
        Command::SetGameMode { mode } => system::set_game_mode(state, *mode),
        Command::ToggleCheat { cheat } => system::toggle_cheat(state, *cheat),
        Command::UpdateSettings { settings } => system::update_settings(state, settings.clone()),
        Command::AddCoins { amount } => system::add_coins(state, *amount),
        Command::AddGems { amount } => system::add_gems(state, *amount),
        Command::TeleportToZone { zone } => system::teleport_to_zone(state, *zone),
    }
}

/// Deducts coins, honoring the infinite-coins cheat (which skips both the
/// check and the deduction, leaving the stored balance untouched).
pub(crate) fn charge_coins(state: &mut GameState, amount: u64) -> Result<(), CommandError> {
    if state.cheats.infinite_coins {
        return Ok(());
    }
    if state.coins < amount {
        return Err(CommandError::InsufficientCoins {
            needed: amount,
            available: state.coins,
        });
    }
    state.coins -= amount;
    Ok(())
}

/// Deducts gems, honoring the infinite-gems cheat.
pub(crate) fn charge_gems(state: &mut GameState, amount: u64) -> Result<(), CommandError> {
    if state.cheats.infinite_gems {
        return Ok(());
    }
    if state.gems < amount {
        return Err(CommandError::InsufficientGems {
            needed: amount,
            available: state.gems,
        });
    }
    state.gems -= amount;
    Ok(())
}

/// Seed for the `context`-th independent roll of the current command.
pub(crate) fn roll_seed(state: &GameState, context: u32) -> u64 {
    crate::env::compute_seed(state.game_seed, state.nonce, context)
}
