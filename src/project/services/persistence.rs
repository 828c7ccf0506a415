//! Save and restore of the project registry through a snapshot store.

use crate::project::{
    domain::ProjectDomainError,
    ports::{SnapshotStore, SnapshotStoreError},
    services::ProjectsManager,
};
use thiserror::Error;

/// Service-level errors for snapshot save and restore.
#[derive(Debug, Error)]
pub enum SnapshotServiceError {
    /// The stored snapshot violates a registry invariant.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] SnapshotStoreError),
}

/// Result type for snapshot service operations.
pub type SnapshotServiceResult<T> = Result<T, SnapshotServiceError>;

/// Moves whole-registry snapshots between a [`ProjectsManager`] and a store.
#[derive(Debug, Clone)]
pub struct SnapshotService<S>
where
    S: SnapshotStore,
{
    store: S,
}

impl<S> SnapshotService<S>
where
    S: SnapshotStore,
{
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Loads the stored snapshot into `manager`, replacing its projects.
    ///
    /// Leaves `manager` untouched and returns 0 when nothing has been saved.
    /// Otherwise returns the number of restored projects.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotServiceError::Store`] when loading fails and
    /// [`SnapshotServiceError::Domain`] when the snapshot holds duplicate
    /// titles.
    pub fn restore(&self, manager: &mut ProjectsManager) -> SnapshotServiceResult<usize> {
        let Some(snapshot) = self.store.load()? else {
            tracing::info!("no stored snapshot, starting with an empty registry");
            return Ok(0);
        };
        let count = snapshot.projects.len();
        manager.import(snapshot)?;
        tracing::info!(
            projects = count,
            next_project_id = %manager.next_project_id(),
            "project registry restored"
        );
        Ok(count)
    }

    /// Writes every project held by `manager` to the store.
    ///
    /// Returns the number of saved projects.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotServiceError::Store`] when the store cannot write the
    /// snapshot.
    pub fn save(&self, manager: &ProjectsManager) -> SnapshotServiceResult<usize> {
        let snapshot = manager.export();
        let count = snapshot.projects.len();
        self.store.save(&snapshot)?;
        tracing::info!(projects = count, "project registry saved");
        Ok(count)
    }
}
