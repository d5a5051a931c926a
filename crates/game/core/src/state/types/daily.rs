//! Daily reward claim tracking.

use serde::{Deserialize, Serialize};

use crate::state::types::common::Timestamp;

/// One day's reward. `claimed_at` is set when the reward moves into
/// `history`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyReward {
    pub day: u32,
    pub coins: u64,
    pub gems: u64,
    pub claimed_at: Option<Timestamp>,
}

/// Claim-streak state. Availability is stocked by the surrounding
/// scheduler; this core only consumes it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyRewards {
    pub streak: u32,
    pub last_claim: Option<Timestamp>,
    pub available_reward: Option<DailyReward>,
    pub history: Vec<DailyReward>,
}
