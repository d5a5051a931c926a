//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::repository::SaveRepository;

/// In-memory implementation of [`SaveRepository`].
#[derive(Default)]
pub struct InMemorySaveRepo {
    blobs: RwLock<HashMap<String, String>>,
}

impl InMemorySaveRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create pre-seeded with a blob, for load-path tests.
    pub fn with_blob(key: &str, blob: &str) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.to_owned(), blob.to_owned());
        Self {
            blobs: RwLock::new(blobs),
        }
    }
}

#[async_trait]
impl SaveRepository for InMemorySaveRepo {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, blob: &str) -> Result<(), RepositoryError> {
        self.blobs
            .write()
            .await
            .insert(key.to_owned(), blob.to_owned());
        Ok(())
    }
}
