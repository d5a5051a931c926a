//! Mode, cheat, settings, and developer-tool transitions.

use crate::config::GameConfig;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::{CheatKind, ModeKind, Settings};

use super::CommandOutcome;

/// Discards the document and recreates defaults under a fresh seed.
pub(crate) fn reset(state: &mut GameState, new_seed: u64) -> Result<CommandOutcome, CommandError> {
    *state = GameState::with_seed(new_seed);
    Ok(CommandOutcome::None)
}

/// Switches mode. Entering survival refills the life pool.
pub(crate) fn set_game_mode(
    state: &mut GameState,
    mode: ModeKind,
) -> Result<CommandOutcome, CommandError> {
    if mode == ModeKind::Survival && state.game_mode.current != ModeKind::Survival {
        state.game_mode.survival_lives = state.game_mode.max_survival_lives;
    }
    state.game_mode.current = mode;
    Ok(CommandOutcome::None)
}

pub(crate) fn toggle_cheat(
    state: &mut GameState,
    cheat: CheatKind,
) -> Result<CommandOutcome, CommandError> {
    let cheats = &mut state.cheats;
    match cheat {
        CheatKind::InfiniteCoins => cheats.infinite_coins = !cheats.infinite_coins,
        CheatKind::InfiniteGems => cheats.infinite_gems = !cheats.infinite_gems,
        CheatKind::ObtainAnyItem => cheats.obtain_any_item = !cheats.obtain_any_item,
    }
    Ok(CommandOutcome::None)
}

pub(crate) fn update_settings(
    state: &mut GameState,
    settings: Settings,
) -> Result<CommandOutcome, CommandError> {
    state.settings = settings;
    Ok(CommandOutcome::None)
}

pub(crate) fn add_coins(state: &mut GameState, amount: u64) -> Result<CommandOutcome, CommandError> {
    if amount == 0 {
        return Err(CommandError::InvalidAmount);
    }
    state.coins = state.coins.saturating_add(amount);
    Ok(CommandOutcome::None)
}

pub(crate) fn add_gems(state: &mut GameState, amount: u64) -> Result<CommandOutcome, CommandError> {
    if amount == 0 {
        return Err(CommandError::InvalidAmount);
    }
    state.gems = state.gems.saturating_add(amount);
    Ok(CommandOutcome::None)
}

/// Developer teleport. Zone stays monotonic, matching the progression
/// invariant victories maintain.
pub(crate) fn teleport_to_zone(
    state: &mut GameState,
    zone: u32,
) -> Result<CommandOutcome, CommandError> {
    if zone < state.zone {
        return Err(CommandError::ZoneBehindCurrent);
    }
    state.zone = zone;
    state.statistics.zones_reached = state.statistics.zones_reached.max(zone);
    if zone >= GameConfig::PREMIUM_UNLOCK_ZONE {
        state.progression.is_premium = true;
    }
    Ok(CommandOutcome::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_recreates_defaults_with_the_new_seed() {
        let mut state = GameState::with_seed(1);
        state.coins = 999_999;
        state.zone = 40;
        reset(&mut state, 77).unwrap();
        assert_eq!(state, GameState::with_seed(77));
    }

    #[test]
    fn entering_survival_refills_lives() {
        let mut state = GameState::default();
        state.game_mode.survival_lives = 0;
        set_game_mode(&mut state, ModeKind::Survival).unwrap();
        assert_eq!(state.game_mode.current, ModeKind::Survival);
        assert_eq!(
            state.game_mode.survival_lives,
            state.game_mode.max_survival_lives
        );

        // Already in survival: switching again must not refill.
        state.game_mode.survival_lives = 1;
        set_game_mode(&mut state, ModeKind::Survival).unwrap();
        assert_eq!(state.game_mode.survival_lives, 1);
    }

    #[test]
    fn cheat_toggles_flip_only_their_flag() {
        let mut state = GameState::default();
        toggle_cheat(&mut state, CheatKind::InfiniteCoins).unwrap();
        assert!(state.cheats.infinite_coins);
        assert!(!state.cheats.infinite_gems);
        toggle_cheat(&mut state, CheatKind::InfiniteCoins).unwrap();
        assert!(!state.cheats.infinite_coins);
    }

    #[test]
    fn teleport_backwards_is_rejected() {
        let mut state = GameState::default();
        state.zone = 10;
        let before = state.clone();
        assert_eq!(
            teleport_to_zone(&mut state, 5).unwrap_err(),
            CommandError::ZoneBehindCurrent
        );
        assert_eq!(state, before);

        teleport_to_zone(&mut state, 60).unwrap();
        assert_eq!(state.zone, 60);
        assert!(state.progression.is_premium);
    }
}
