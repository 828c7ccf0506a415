//! Storage port for whole-registry snapshots.

use crate::project::domain::ProjectsSnapshot;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Durable home for the latest project registry snapshot.
///
/// Stores keep exactly one snapshot; saving replaces the previous one.
pub trait SnapshotStore {
    /// Loads the stored snapshot.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::UnsupportedVersion`] when the stored
    /// snapshot uses an unknown format version, or a serialization or
    /// persistence error when it cannot be read.
    fn load(&self) -> SnapshotStoreResult<Option<ProjectsSnapshot>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns a serialization or persistence error when the snapshot cannot
    /// be written.
    fn save(&self, snapshot: &ProjectsSnapshot) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The stored snapshot was written with an unknown format version.
    #[error("unsupported snapshot format version: {0}")]
    UnsupportedVersion(u32),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Serialization(Arc<dyn std::error::Error + Send + Sync>),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps an encoding or decoding error.
    pub fn serialization(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Serialization(Arc::new(err))
    }

    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
