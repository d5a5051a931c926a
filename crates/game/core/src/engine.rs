//! Command execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]: it
//! folds wall-clock time into the time-derived subsystems, routes the
//! command to its transition, bumps the nonce, and recomputes derived
//! stats. Callers that need the no-partial-mutation guarantee (the store)
//! run it against a clone and commit on success.

use crate::command::{self, Command, CommandOutcome};
use crate::config::GameConfig;
use crate::env::{GameEnv, compute_seed};
use crate::error::CommandError;
use crate::state::GameState;
use crate::stats;

/// Contexts 0..99 belong to command rolls; sync rolls start here.
const CTX_MARKET_BASE: u32 = 100;

/// Authoritative reducer over a mutably borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes one command.
    ///
    /// On success the nonce has advanced and derived stats are fresh. On
    /// error the command itself made no change, though time-derived
    /// subsystems may have synced; callers wanting full atomicity execute
    /// against a clone.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        command: &Command,
    ) -> Result<CommandOutcome, CommandError> {
        self.sync_time(&env);

        let outcome = command::execute(self.state, &env, command)?;

        self.state.nonce += 1;
        stats::refresh(self.state);
        Ok(outcome)
    }

    /// Folds elapsed wall-clock time into garden growth, menu skill
    /// expiry, and the market rotation. Skipped when no clock is
    /// installed, so pure-logic tests stay deterministic.
    fn sync_time(&mut self, env: &GameEnv<'_>) {
        let Some(now) = env.now() else {
            return;
        };

        self.state.garden_of_growth.sync(now);
        self.state.skills.sync(now);
        self.state.offline_progress.last_seen = Some(now);

        if self.state.yojef_market.needs_refresh(now)
            && let Ok(content) = env.content()
        {
            let mut items = Vec::with_capacity(GameConfig::MARKET_SIZE);
            for slot in 0..GameConfig::MARKET_SIZE {
                let id = self.state.allocate_item_id();
                let seed = compute_seed(
                    self.state.game_seed,
                    self.state.nonce,
                    CTX_MARKET_BASE + slot as u32,
                );
                items.push(content.generate_relic(id, seed));
            }
            self.state.yojef_market.items = items;
            self.state.yojef_market.last_refresh = Some(now);
            self.state.yojef_market.next_refresh =
                Some(crate::state::types::Timestamp::from_millis(
                    now.as_millis() + GameConfig::MARKET_REFRESH_INTERVAL_MS,
                ));
        }
    }
}
