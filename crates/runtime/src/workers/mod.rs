//! Background workers.

mod persistence;

pub use persistence::{PersistenceWorker, spawn_persistence_worker};
