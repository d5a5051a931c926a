//! Traits describing the engine's external collaborators.
//!
//! Oracles expose content generation, deterministic randomness, and the
//! wall clock. The [`GameEnv`] aggregate bundles them so commands can
//! access everything they need without hard coupling to concrete
//! implementations.
mod clock;
mod content;
mod error;
mod rng;

pub use clock::{ClockOracle, FixedClock};
pub use content::{ContentOracle, RarityWeights};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::state::types::Timestamp;

/// Aggregates the read-only oracles required by the command layer.
///
/// Each oracle is optional; a command that needs a missing oracle fails
/// with a typed [`OracleError`] and the state stays unchanged.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    content: Option<&'a dyn ContentOracle>,
    rng: Option<&'a dyn RngOracle>,
    clock: Option<&'a dyn ClockOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        content: Option<&'a dyn ContentOracle>,
        rng: Option<&'a dyn RngOracle>,
        clock: Option<&'a dyn ClockOracle>,
    ) -> Self {
        Self {
            content,
            rng,
            clock,
        }
    }

    pub fn with_all(
        content: &'a dyn ContentOracle,
        rng: &'a dyn RngOracle,
        clock: &'a dyn ClockOracle,
    ) -> Self {
        Self::new(Some(content), Some(rng), Some(clock))
    }

    pub fn empty() -> Self {
        Self {
            content: None,
            rng: None,
            clock: None,
        }
    }

    /// Returns the content oracle, or an error if not available.
    pub fn content(&self) -> Result<&'a dyn ContentOracle, OracleError> {
        self.content.ok_or(OracleError::ContentNotAvailable)
    }

    /// Returns the RNG oracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the clock oracle, or an error if not available.
    pub fn clock(&self) -> Result<&'a dyn ClockOracle, OracleError> {
        self.clock.ok_or(OracleError::ClockNotAvailable)
    }

    /// Current time if a clock is installed. Time-derived syncs are
    /// skipped without one rather than failing the command.
    pub fn now(&self) -> Option<Timestamp> {
        self.clock.map(ClockOracle::now)
    }
}
