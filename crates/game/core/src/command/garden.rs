//! Garden of Growth transitions.
//!
//! Growth itself accrues during the engine's time sync; these commands
//! only plant and water.

use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;

use super::{CommandOutcome, charge_coins};

pub(crate) fn plant_seed(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<CommandOutcome, CommandError> {
    if state.garden_of_growth.is_planted {
        return Err(CommandError::GardenAlreadyPlanted);
    }
    let seed_cost = state.garden_of_growth.seed_cost;
    charge_coins(state, seed_cost)?;

    let now = env.now();
    state.garden_of_growth.is_planted = true;
    state.garden_of_growth.planted_at = now;
    state.garden_of_growth.last_update = now;
    state.garden_of_growth.growth_cm = 0.0;
    state.garden_of_growth.water_hours_remaining = 0.0;
    Ok(CommandOutcome::None)
}

/// Buys `hours` of water. Cost scales linearly with the daily rate:
/// `ceil(hours / 24 * water_cost_per_day)` coins.
pub(crate) fn buy_water(state: &mut GameState, hours: u32) -> Result<CommandOutcome, CommandError> {
    if hours == 0 {
        return Err(CommandError::InvalidAmount);
    }
    if !state.garden_of_growth.is_planted {
        return Err(CommandError::GardenNotPlanted);
    }

    let cost = (f64::from(hours) / 24.0 * state.garden_of_growth.water_cost_per_day as f64).ceil()
        as u64;
    charge_coins(state, cost)?;

    state.garden_of_growth.water_hours_remaining += f64::from(hours);
    Ok(CommandOutcome::None)
}
