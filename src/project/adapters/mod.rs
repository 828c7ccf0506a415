//! Storage adapters for project registry snapshots.
//!
//! # Available Adapters
//!
//! - [`memory::InMemorySnapshotStore`]: shared in-process slot, for tests and
//!   front ends without durable storage
//! - [`json::JsonFileSnapshotStore`]: pretty-printed JSON document inside a
//!   capability-scoped directory
//!
//! Both implement [`SnapshotStore`](crate::project::ports::SnapshotStore).

pub mod json;
pub mod memory;
