//! Save codec and load-time synchronization.
//!
//! The persisted blob is the full document as JSON with timestamps as
//! epoch milliseconds. Decoding back-fills missing fields from defaults
//! (`#[serde(default)]` throughout the state tree), so old saves pick up
//! newly introduced subsystems; malformed data falls back to a fresh
//! document rather than failing startup.

use mindspire_core::{GameConfig, GameState, Timestamp};
use tracing::warn;

/// Serializes the full document.
pub fn encode(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Deserializes a blob, falling back to a fresh default document (under
/// `fallback_seed`) when the data is unreadable.
pub fn decode_or_default(blob: &str, fallback_seed: u64) -> GameState {
    match serde_json::from_str(blob) {
        Ok(state) => state,
        Err(error) => {
            warn!("Malformed save blob, starting fresh: {error}");
            GameState::with_seed(fallback_seed)
        }
    }
}

/// Folds time spent offline into the offline-progress accumulator.
///
/// Coins accrue per full offline minute scaled by zone; gems trickle per
/// offline hour. The window is capped at `max_offline_hours`. Called once
/// at load, before the store starts accepting commands.
pub fn accrue_offline_progress(state: &mut GameState, now: Timestamp) {
    let offline = &mut state.offline_progress;
    let Some(last_seen) = offline.last_seen else {
        offline.last_seen = Some(now);
        return;
    };

    let elapsed_seconds = (now.since(last_seen) / 1000) as u64;
    let cap_seconds = u64::from(offline.max_offline_hours) * 3600;
    let counted = elapsed_seconds.min(cap_seconds);

    offline.accumulated_coins += u64::from(state.zone) * (counted / 60);
    offline.accumulated_gems += GameConfig::OFFLINE_GEMS_PER_HOUR * (counted / 3600);
    offline.accumulated_seconds += counted;
    offline.last_seen = Some(now);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_blob_falls_back_to_defaults() {
        let state = decode_or_default("{not json", 123);
        assert_eq!(state, GameState::with_seed(123));

        let state = decode_or_default(r#"{"coins": "not a number"}"#, 123);
        assert_eq!(state, GameState::with_seed(123));
    }

    #[test]
    fn encode_decode_round_trips() {
        let mut state = GameState::with_seed(5);
        state.coins = 42;
        state.zone = 17;
        let blob = encode(&state).unwrap();
        assert_eq!(decode_or_default(&blob, 0), state);
    }

    #[test]
    fn offline_accrual_is_capped_and_zone_scaled() {
        let mut state = GameState::with_seed(0);
        state.zone = 10;
        state.offline_progress.last_seen = Some(Timestamp::from_millis(0));

        // Two hours offline: 120 minutes * zone 10 coins, 2 gems.
        accrue_offline_progress(&mut state, Timestamp::from_millis(2 * 3_600_000));
        assert_eq!(state.offline_progress.accumulated_coins, 1200);
        assert_eq!(state.offline_progress.accumulated_gems, 2);
        assert_eq!(state.offline_progress.accumulated_seconds, 7200);

        // A week offline caps at the configured window.
        let mut state = GameState::with_seed(0);
        state.zone = 1;
        state.offline_progress.last_seen = Some(Timestamp::from_millis(0));
        accrue_offline_progress(&mut state, Timestamp::from_millis(7 * 24 * 3_600_000));
        let cap_seconds = u64::from(GameConfig::OFFLINE_MAX_HOURS) * 3600;
        assert_eq!(state.offline_progress.accumulated_seconds, cap_seconds);
    }

    #[test]
    fn first_load_just_records_last_seen() {
        let mut state = GameState::with_seed(0);
        accrue_offline_progress(&mut state, Timestamp::from_millis(9_000));
        assert_eq!(state.offline_progress.accumulated_coins, 0);
        assert_eq!(
            state.offline_progress.last_seen,
            Some(Timestamp::from_millis(9_000))
        );
    }
}
