//! Application services for project tracking.

mod manager;
mod persistence;

pub use manager::ProjectsManager;
pub use persistence::{SnapshotService, SnapshotServiceError, SnapshotServiceResult};
