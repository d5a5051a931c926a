//! Mining and the shiny gem exchange.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;

use super::{CommandOutcome, roll_seed};

const CTX_SHINY: u32 = 0;

/// What one mine action produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineOutcome {
    pub shiny: bool,
}

/// Mines exactly one gem, or (rarely) one shiny gem instead.
pub(crate) fn mine(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<CommandOutcome, CommandError> {
    let rng = env.rng()?;

    let shiny = rng.roll_d100(roll_seed(state, CTX_SHINY)) <= GameConfig::SHINY_MINE_CHANCE_PCT;
    if shiny {
        state.shiny_gems += 1;
        state.mining.total_shiny_gems_mined += 1;
        state.statistics.shiny_gems_earned += 1;
    } else {
        state.gems += 1;
        state.mining.total_gems_mined += 1;
        state.statistics.gems_earned += 1;
    }

    Ok(CommandOutcome::Mine(MineOutcome { shiny }))
}

/// Converts shiny gems to gems at the fixed 1:10 rate.
pub(crate) fn exchange_shiny_gems(
    state: &mut GameState,
    amount: u64,
) -> Result<CommandOutcome, CommandError> {
    if amount == 0 {
        return Err(CommandError::InvalidAmount);
    }
    if state.shiny_gems < amount {
        return Err(CommandError::InsufficientShinyGems {
            needed: amount,
            available: state.shiny_gems,
        });
    }
    state.shiny_gems -= amount;
    let gems = amount * GameConfig::SHINY_EXCHANGE_RATE;
    state.gems += gems;
    state.statistics.gems_earned += gems;
    Ok(CommandOutcome::None)
}
