//! File-based SaveRepository implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::fs;

use crate::error::RepositoryError;
use crate::repository::SaveRepository;

/// File-backed implementation of [`SaveRepository`].
///
/// Each key maps to `{base_dir}/{key}.json`. Writes go through a temp
/// file and an atomic rename so a crash mid-write never corrupts the
/// previous save.
pub struct FileSaveRepo {
    base_dir: PathBuf,
}

impl FileSaveRepo {
    /// Create a repository rooted at an explicit directory.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    /// Create a repository in the platform's per-user data directory.
    pub async fn in_project_dirs() -> Result<Self, RepositoryError> {
        let dirs = ProjectDirs::from("io", "mindspire", "mindspire")
            .ok_or(RepositoryError::NoSaveLocation)?;
        Self::new(dirs.data_dir()).await
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SaveRepository for FileSaveRepo {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn set(&self, key: &str, blob: &str) -> Result<(), RepositoryError> {
        let path = self.blob_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, blob).await?;
        fs::rename(&temp_path, &path).await?;

        tracing::debug!("Saved blob[{}] to {}", key, path.display());
        Ok(())
    }
}
