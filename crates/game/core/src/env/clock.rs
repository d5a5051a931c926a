//! Wall-clock oracle.

use crate::state::types::Timestamp;

/// Supplies "now" to time-derived subsystems (garden growth, market
/// rotation, skill expiry, offline accrual).
///
/// Commands never read the system clock directly; tests install a fixed
/// clock and the engine stays deterministic.
pub trait ClockOracle: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Fixed clock for tests and replays.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub fn at_millis(millis: i64) -> Self {
        Self(Timestamp::from_millis(millis))
    }
}

impl ClockOracle for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
