//! Daily reward transitions.
//!
//! Availability is computed by the surrounding scheduler and stocked via
//! `OfferDailyReward`; this core only applies claims.

use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::DailyReward;

use super::CommandOutcome;

/// Stocks the claimable reward. The scheduler's entry point.
pub(crate) fn offer(
    state: &mut GameState,
    reward: DailyReward,
) -> Result<CommandOutcome, CommandError> {
    state.daily_rewards.available_reward = Some(reward);
    Ok(CommandOutcome::None)
}

pub(crate) fn claim(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<CommandOutcome, CommandError> {
    let Some(mut reward) = state.daily_rewards.available_reward.take() else {
        return Err(CommandError::NoDailyReward);
    };

    state.coins += reward.coins;
    state.gems += reward.gems;
    state.statistics.coins_earned += reward.coins;
    state.statistics.gems_earned += reward.gems;

    let now = env.now();
    reward.claimed_at = now;
    state.daily_rewards.streak += 1;
    state.daily_rewards.last_claim = now;
    state.daily_rewards.history.push(reward);
    Ok(CommandOutcome::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedClock;

    #[test]
    fn claim_without_available_reward_is_rejected() {
        let mut state = GameState::default();
        let before = state.clone();
        assert_eq!(
            claim(&mut state, &GameEnv::empty()).unwrap_err(),
            CommandError::NoDailyReward
        );
        assert_eq!(state, before);
    }

    #[test]
    fn claim_grants_and_archives_the_reward() {
        let mut state = GameState::default();
        state.daily_rewards.available_reward = Some(DailyReward {
            day: 3,
            coins: 250,
            gems: 10,
            claimed_at: None,
        });
        let clock = FixedClock::at_millis(5_000);
        let env = GameEnv::new(None, None, Some(&clock));

        claim(&mut state, &env).unwrap();
        assert_eq!(state.coins, 350);
        assert_eq!(state.gems, 10);
        assert!(state.daily_rewards.available_reward.is_none());
        assert_eq!(state.daily_rewards.streak, 1);
        assert_eq!(state.daily_rewards.history.len(), 1);
        assert!(state.daily_rewards.history[0].claimed_at.is_some());
    }
}
