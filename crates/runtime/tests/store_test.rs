//! End-to-end store tests: load, dispatch, persistence.

use std::sync::Arc;

use async_trait::async_trait;
use mindspire_content::DefaultContent;
use mindspire_core::{
    CheatKind, Command, CommandError, FixedClock, GameConfig, GameState, ItemKind, PcgRng,
    Timestamp,
};
use mindspire_runtime::{
    FileSaveRepo, GameStore, InMemorySaveRepo, RepositoryError, SAVE_KEY, SaveRepository, save,
};
use tokio::sync::RwLock;

/// Repository wrapper that records every blob written, in order.
#[derive(Default)]
struct RecordingRepo {
    blobs: RwLock<Vec<String>>,
}

#[async_trait]
impl SaveRepository for RecordingRepo {
    async fn get(&self, _key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.blobs.read().await.last().cloned())
    }

    async fn set(&self, _key: &str, blob: &str) -> Result<(), RepositoryError> {
        self.blobs.write().await.push(blob.to_owned());
        Ok(())
    }
}

/// Repository whose writes always fail, for the best-effort guarantee.
struct FailingRepo;

#[async_trait]
impl SaveRepository for FailingRepo {
    async fn get(&self, _key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _blob: &str) -> Result<(), RepositoryError> {
        Err(RepositoryError::Io(std::io::Error::other("disk on fire")))
    }
}

async fn open_store(repo: Arc<dyn SaveRepository>, clock_millis: i64) -> GameStore {
    GameStore::open(
        repo,
        Arc::new(DefaultContent::new()),
        Arc::new(PcgRng),
        Arc::new(FixedClock::at_millis(clock_millis)),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn fresh_open_installs_defaults_and_persists_them() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let repo = Arc::new(InMemorySaveRepo::new());

    let store = open_store(repo.clone(), 0).await;
    assert_eq!(store.state().coins, 100);
    assert_eq!(store.state().zone, 1);
    store.shutdown().await;

    let blob = repo.get(SAVE_KEY).await.unwrap().expect("initial persist");
    let decoded = save::decode_or_default(&blob, 0);
    assert_eq!(decoded.coins, 100);
}

#[tokio::test]
async fn dispatched_commands_commit_and_reach_storage() {
    let repo = Arc::new(InMemorySaveRepo::new());

    let mut store = open_store(repo.clone(), 0).await;
    store.add_coins(900).unwrap();
    store.start_combat().unwrap();
    let expected = store.state().clone();
    store.shutdown().await;

    let blob = repo.get(SAVE_KEY).await.unwrap().unwrap();
    assert_eq!(save::decode_or_default(&blob, 0), expected);

    // Reopening resumes from the persisted document.
    let store = open_store(repo, 0).await;
    assert_eq!(store.state().coins, expected.coins);
    assert!(store.state().in_combat);
    store.shutdown().await;
}

#[tokio::test]
async fn rejected_commands_leave_state_byte_identical_and_unpersisted() {
    let repo = Arc::new(RecordingRepo::default());

    let mut store = open_store(repo.clone(), 0).await;
    let before = store.state().clone();

    let err = store.open_chest(1_000_000).unwrap_err();
    assert!(matches!(err, CommandError::InsufficientCoins { .. }));
    assert_eq!(store.state(), &before);

    let err = store.prestige().unwrap_err();
    assert!(matches!(err, CommandError::LevelTooLow { .. }));
    assert_eq!(store.state(), &before);

    store.shutdown().await;
    // Only the open-time persist landed.
    assert_eq!(repo.blobs.read().await.len(), 1);
}

#[tokio::test]
async fn each_persist_snapshots_the_state_at_schedule_time() {
    let repo = Arc::new(RecordingRepo::default());

    let mut store = open_store(repo.clone(), 0).await;
    store.add_coins(50).unwrap();
    store.add_coins(100).unwrap();
    store.shutdown().await;

    let blobs = repo.blobs.read().await;
    assert_eq!(blobs.len(), 3);
    assert_eq!(save::decode_or_default(&blobs[1], 0).coins, 150);
    assert_eq!(save::decode_or_default(&blobs[2], 0).coins, 250);
}

#[tokio::test]
async fn persistence_failures_do_not_roll_back_memory() {
    let mut store = open_store(Arc::new(FailingRepo), 0).await;
    store.add_coins(500).unwrap();
    assert_eq!(store.state().coins, 600);
    store.shutdown().await;
}

#[tokio::test]
async fn partial_save_backfills_new_subsystems() {
    let blob = r#"{"coins": 4242, "zone": 12, "game_seed": 5}"#;
    let repo = Arc::new(InMemorySaveRepo::with_blob(SAVE_KEY, blob));

    let store = open_store(repo, 0).await;
    assert_eq!(store.state().coins, 4242);
    assert_eq!(store.state().zone, 12);
    assert_eq!(store.state().garden_of_growth.seed_cost, 100);
    assert!(store.state().daily_rewards.history.is_empty());
    store.shutdown().await;
}

#[tokio::test]
async fn malformed_save_falls_back_to_defaults() {
    let repo = Arc::new(InMemorySaveRepo::with_blob(SAVE_KEY, "!!not json!!"));

    let store = open_store(repo, 0).await;
    assert_eq!(store.state().coins, 100);
    assert_eq!(store.state().zone, 1);
    store.shutdown().await;
}

#[tokio::test]
async fn offline_progress_accrues_on_open() {
    let mut seeded = GameState::with_seed(3);
    seeded.zone = 10;
    seeded.offline_progress.last_seen = Some(Timestamp::from_millis(0));
    let blob = save::encode(&seeded).unwrap();
    let repo = Arc::new(InMemorySaveRepo::with_blob(SAVE_KEY, &blob));

    // Two hours later.
    let mut store = open_store(repo, 2 * 3_600_000).await;
    assert_eq!(store.state().offline_progress.accumulated_coins, 1200);
    assert_eq!(store.state().offline_progress.accumulated_gems, 2);

    store.claim_offline_rewards().unwrap();
    assert_eq!(store.state().coins, 100 + 1200);
    assert_eq!(store.state().offline_progress.accumulated_coins, 0);
    store.shutdown().await;
}

#[tokio::test]
async fn market_stocks_on_open_and_purchase_flows() {
    let repo = Arc::new(InMemorySaveRepo::new());
    let mut store = open_store(repo, 1_000).await;

    // The open-time sync has not run a command yet; the first dispatch
    // rotates the market in.
    store.add_gems(1_000).unwrap();
    let market_len = store.state().yojef_market.items.len();
    assert_eq!(market_len, GameConfig::MARKET_SIZE);

    let relic_id = store.state().yojef_market.items[0].id;
    store.purchase_relic(relic_id).unwrap();
    assert_eq!(
        store.state().yojef_market.items.len(),
        GameConfig::MARKET_SIZE - 1
    );
    assert_eq!(store.state().inventory.equipped_relics.len(), 1);

    store.unequip_relic(relic_id).unwrap();
    store.sell_relic(relic_id).unwrap();
    assert!(store.state().inventory.relics.is_empty());
    store.shutdown().await;
}

#[tokio::test]
async fn combat_loop_through_the_store() {
    let repo = Arc::new(InMemorySaveRepo::new());
    let mut store = open_store(repo, 0).await;

    store.start_combat().unwrap();
    assert!(store.state().combat_active());
    let err = store.start_combat().unwrap_err();
    assert_eq!(err, CommandError::AlreadyInCombat);

    let mut guard = 0;
    while store.state().in_combat {
        store.attack(true, Some("science".to_owned())).unwrap();
        guard += 1;
        assert!(guard < 100, "combat should terminate");
    }
    assert_eq!(store.state().zone, 2);
    assert!(store.state().statistics.total_victories >= 1);
    assert!(store.state().combat_log.len() <= GameConfig::COMBAT_LOG_LIMIT);
    store.shutdown().await;
}

#[tokio::test]
async fn chest_and_bulk_economy_through_the_store() {
    let repo = Arc::new(InMemorySaveRepo::new());
    let mut store = open_store(repo, 0).await;
    store.add_coins(400).unwrap(); // 500 total
    store.add_gems(500).unwrap();

    let reward = store.open_chest(100).unwrap();
    assert_eq!(store.state().coins, 400);
    assert!((5..=14).contains(&reward.bonus_gems));
    assert_eq!(store.state().statistics.chests_opened, 1);

    let weapon_ids: Vec<_> = store.state().inventory.weapons.iter().map(|w| w.id).collect();
    if !weapon_ids.is_empty() {
        store.bulk_upgrade(ItemKind::Weapon, weapon_ids).unwrap();
        assert!(store.state().inventory.weapons.iter().all(|w| w.level == 2));
    }
    store.shutdown().await;
}

#[tokio::test]
async fn cheats_reset_and_mode_through_the_store() {
    let repo = Arc::new(InMemorySaveRepo::new());
    let mut store = open_store(repo, 0).await;

    store.toggle_cheat(CheatKind::InfiniteCoins).unwrap();
    assert!(store.state().cheats.infinite_coins);
    store.open_chest(999_999).unwrap();
    assert_eq!(store.state().coins, 100);

    store
        .set_game_mode(mindspire_core::ModeKind::Survival)
        .unwrap();
    assert_eq!(
        store.state().game_mode.survival_lives,
        GameConfig::SURVIVAL_LIVES
    );

    store.reset().unwrap();
    assert_eq!(store.state().coins, 100);
    assert!(!store.state().cheats.infinite_coins);
    assert_eq!(store.state().nonce, 1);
    store.shutdown().await;
}

#[tokio::test]
async fn file_repo_round_trips_a_real_session() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(FileSaveRepo::new(dir.path()).await.unwrap());

    let mut store = open_store(repo.clone(), 0).await;
    store.add_coins(900).unwrap();
    store.mine().unwrap();
    let expected = store.state().clone();
    store.shutdown().await;

    let store = open_store(repo, 0).await;
    assert_eq!(store.state().coins, expected.coins);
    assert_eq!(
        store.state().mining.total_gems_mined + store.state().mining.total_shiny_gems_mined,
        1
    );
    store.shutdown().await;
}

#[tokio::test]
async fn dispatch_rejects_equipped_item_sale() {
    let repo = Arc::new(InMemorySaveRepo::new());
    let mut store = open_store(repo, 0).await;
    store.add_coins(900).unwrap();

    let reward = store.open_chest(100).unwrap();
    let (weapon, id) = match reward.item {
        mindspire_core::ChestItem::Weapon(w) => (true, w.id),
        mindspire_core::ChestItem::Armor(a) => (false, a.id),
    };

    if weapon {
        store.equip_weapon(id).unwrap();
        let before = store.state().clone();
        assert_eq!(
            store.sell_weapon(id).unwrap_err(),
            CommandError::ItemEquipped(id)
        );
        assert_eq!(store.state(), &before);
    } else {
        store.equip_armor(id).unwrap();
        let before = store.state().clone();
        assert_eq!(
            store.sell_armor(id).unwrap_err(),
            CommandError::ItemEquipped(id)
        );
        assert_eq!(store.state(), &before);
    }
    store.shutdown().await;
}

#[tokio::test]
async fn dispatching_raw_commands_matches_named_methods() {
    let repo = Arc::new(InMemorySaveRepo::new());
    let mut store = open_store(repo, 0).await;

    store
        .dispatch(&Command::AddCoins { amount: 25 })
        .unwrap();
    assert_eq!(store.state().coins, 125);
    store.shutdown().await;
}
