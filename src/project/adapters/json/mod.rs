//! JSON file adapter implementations.

mod snapshot;

pub use snapshot::JsonFileSnapshotStore;
