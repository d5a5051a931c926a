//! Wall-clock implementation for the engine's clock oracle.

use chrono::Utc;
use mindspire_core::{ClockOracle, Timestamp};

/// System clock reporting epoch milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockOracle for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(Utc::now().timestamp_millis())
    }
}
