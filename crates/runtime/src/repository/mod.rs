//! Save repositories: opaque async key-value blob stores.
//!
//! The store persists the full document as a JSON blob under a fixed key
//! and reads it back at startup. Implementations are interchangeable;
//! in-memory for tests, file-backed for the desktop client.

mod file;
mod memory;

pub use file::FileSaveRepo;
pub use memory::InMemorySaveRepo;

use async_trait::async_trait;

use crate::error::RepositoryError;

/// The single key the save document lives under.
pub const SAVE_KEY: &str = "mindspire_save";

/// Async key-value blob store for serialized save documents.
#[async_trait]
pub trait SaveRepository: Send + Sync {
    /// Read the blob stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `blob` under `key`, replacing any previous value.
    async fn set(&self, key: &str, blob: &str) -> Result<(), RepositoryError>;
}
