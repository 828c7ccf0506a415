//! Versioned export format for the whole project registry.

use super::PersistedProjectData;
use serde::{Deserialize, Serialize};

/// Snapshot of every project held by a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsSnapshot {
    /// Layout version of this document.
    pub format_version: u32,
    /// Projects in registry order.
    pub projects: Vec<PersistedProjectData>,
}

impl ProjectsSnapshot {
    /// Layout version written by this build.
    pub const CURRENT_FORMAT_VERSION: u32 = 1;

    /// Wraps project records in a snapshot of the current format version.
    #[must_use]
    pub const fn new(projects: Vec<PersistedProjectData>) -> Self {
        Self {
            format_version: Self::CURRENT_FORMAT_VERSION,
            projects,
        }
    }

    /// Returns `true` when this build can read the snapshot.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.format_version == Self::CURRENT_FORMAT_VERSION
    }
}
