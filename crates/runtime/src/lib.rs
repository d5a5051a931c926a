//! Runtime shell around the deterministic game engine.
//!
//! Hosts the state store (the single owner of the live
//! [`mindspire_core::GameState`]), the save repositories, and the tokio
//! persistence worker. Everything game-rule-shaped lives in
//! `mindspire-core`; this crate wires it to storage and the wall clock.

pub mod clock;
pub mod error;
pub mod repository;
pub mod save;
pub mod store;
pub mod workers;

pub use clock::SystemClock;
pub use error::{RepositoryError, StoreError};
pub use repository::{FileSaveRepo, InMemorySaveRepo, SAVE_KEY, SaveRepository};
pub use store::GameStore;
pub use workers::{PersistenceWorker, spawn_persistence_worker};
