//! Yojef Market: rotating relic stock.

use serde::{Deserialize, Serialize};

use crate::state::types::common::{ItemId, Timestamp};
use crate::state::types::item::Relic;

/// The rotating relic market. Stock is regenerated by the store sync once
/// `next_refresh` passes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YojefMarket {
    pub items: Vec<Relic>,
    pub last_refresh: Option<Timestamp>,
    pub next_refresh: Option<Timestamp>,
}

impl YojefMarket {
    pub fn item(&self, id: ItemId) -> Option<&Relic> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn needs_refresh(&self, now: Timestamp) -> bool {
        match self.next_refresh {
            Some(next) => now >= next,
            None => true,
        }
    }
}
