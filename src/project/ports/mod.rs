//! Port contracts for project tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod snapshot;

pub use snapshot::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
