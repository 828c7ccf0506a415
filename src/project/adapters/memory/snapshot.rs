//! In-memory snapshot store.

use std::sync::{Arc, RwLock};

use crate::project::{
    domain::ProjectsSnapshot,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Snapshot store keeping the latest snapshot in memory.
///
/// Clones share the same slot, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    slot: Arc<RwLock<Option<ProjectsSnapshot>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: ProjectsSnapshot) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(snapshot))),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> SnapshotStoreError {
    SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> SnapshotStoreResult<Option<ProjectsSnapshot>> {
        let slot = self.slot.read().map_err(poisoned)?;
        match slot.as_ref() {
            Some(snapshot) if !snapshot.is_supported() => Err(
                SnapshotStoreError::UnsupportedVersion(snapshot.format_version),
            ),
            other => Ok(other.cloned()),
        }
    }

    fn save(&self, snapshot: &ProjectsSnapshot) -> SnapshotStoreResult<()> {
        let mut slot = self.slot.write().map_err(poisoned)?;
        *slot = Some(snapshot.clone());
        Ok(())
    }
}
