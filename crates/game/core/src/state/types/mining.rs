//! Mining counters.

use serde::{Deserialize, Serialize};

/// Lifetime mining yields. Each mine action produces exactly one gem or
/// (rarely) one shiny gem; the currencies themselves live on the root
/// state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mining {
    pub total_gems_mined: u64,
    pub total_shiny_gems_mined: u64,
}
