//! Persistence worker for fire-and-forget save writes.
//!
//! The store sends an owned snapshot of the document after every accepted
//! command; this worker serializes and writes each one in order. The
//! channel carries clones, not references, so a snapshot captured at
//! schedule time can never observe state mutated later.
//!
//! Failures are logged and dropped: in-memory state is the source of
//! truth and the next successful write reconciles storage.

use std::sync::Arc;

use mindspire_core::GameState;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::repository::{SAVE_KEY, SaveRepository};
use crate::save;

/// Background task that drains save snapshots into the repository.
pub struct PersistenceWorker {
    repo: Arc<dyn SaveRepository>,
    snapshot_rx: mpsc::UnboundedReceiver<GameState>,
}

impl PersistenceWorker {
    pub fn new(
        repo: Arc<dyn SaveRepository>,
        snapshot_rx: mpsc::UnboundedReceiver<GameState>,
    ) -> Self {
        Self { repo, snapshot_rx }
    }

    /// Main worker loop. Ends when the store drops its sender, after
    /// draining whatever is still queued.
    pub async fn run(mut self) {
        info!("PersistenceWorker started");

        while let Some(snapshot) = self.snapshot_rx.recv().await {
            self.persist(&snapshot).await;
        }

        info!("PersistenceWorker stopped");
    }

    async fn persist(&self, snapshot: &GameState) {
        let blob = match save::encode(snapshot) {
            Ok(blob) => blob,
            Err(error) => {
                warn!("Failed to serialize save snapshot: {error}");
                return;
            }
        };

        match self.repo.set(SAVE_KEY, &blob).await {
            Ok(()) => debug!(nonce = snapshot.nonce, "Save snapshot persisted"),
            Err(error) => warn!("Failed to persist save snapshot: {error}"),
        }
    }
}

/// Spawns the worker, returning the snapshot sender and the task handle.
pub fn spawn_persistence_worker(
    repo: Arc<dyn SaveRepository>,
) -> (mpsc::UnboundedSender<GameState>, JoinHandle<()>) {
    let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();
    let worker = PersistenceWorker::new(repo, snapshot_rx);
    let handle = tokio::spawn(worker.run());
    (snapshot_tx, handle)
}
