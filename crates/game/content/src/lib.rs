//! Default content generators for the trivia RPG.
//!
//! This crate houses the stock implementation of the engine's
//! [`mindspire_core::ContentOracle`]: rarity-scaled weapons and armor,
//! zone-scaled enemies, market relics, and the chest weight tables.
//! Content is consumed by runtime oracles and never appears in game
//! state; the surrounding application can substitute its own generators
//! without touching the engine.

mod generator;
mod names;

pub use generator::DefaultContent;
