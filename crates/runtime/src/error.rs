//! Runtime error types.

/// Errors from the save repositories.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("No writable save location available")]
    NoSaveLocation,
}

/// Errors surfaced by the store itself. Command rejections are not
/// errors at this level; they come back as
/// [`mindspire_core::CommandError`] values.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Failed to serialize save document: {0}")]
    Encode(#[from] serde_json::Error),
}
