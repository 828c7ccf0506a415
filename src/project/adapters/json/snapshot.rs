//! JSON file snapshot store.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::io;

use crate::config::TrackerConfig;
use crate::project::{
    domain::ProjectsSnapshot,
    ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult},
};

/// Snapshot store writing one pretty-printed JSON document.
///
/// All file access is confined to the directory handed to
/// [`open`](Self::open). Saves go to a temporary sibling file that is then
/// renamed over the snapshot, so a failed write leaves the previous snapshot
/// intact.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    dir: Dir,
    file_name: String,
}

/// Reads only the version field so unknown layouts are rejected before a
/// full decode is attempted.
#[derive(Deserialize)]
struct VersionProbe {
    format_version: u32,
}

impl JsonFileSnapshotStore {
    /// Opens a store for `file_name` inside `dir_path`, creating the
    /// directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(dir_path: &Utf8Path, file_name: impl Into<String>) -> SnapshotStoreResult<Self> {
        Dir::create_ambient_dir_all(dir_path, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(dir_path, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        Ok(Self {
            dir,
            file_name: file_name.into(),
        })
    }

    /// Opens the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the configured
    /// directory cannot be created or opened.
    pub fn from_config(config: &TrackerConfig) -> SnapshotStoreResult<Self> {
        Self::open(config.data_dir(), config.snapshot_file())
    }

    /// Returns the snapshot file name inside the store directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn temp_file_name(&self) -> String {
        format!("{}.tmp", self.file_name)
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> SnapshotStoreResult<Option<ProjectsSnapshot>> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(file = %self.file_name, "no snapshot file present");
                return Ok(None);
            }
            Err(err) => return Err(SnapshotStoreError::persistence(err)),
        };

        let probe: VersionProbe =
            serde_json::from_str(&contents).map_err(SnapshotStoreError::serialization)?;
        if probe.format_version != ProjectsSnapshot::CURRENT_FORMAT_VERSION {
            return Err(SnapshotStoreError::UnsupportedVersion(probe.format_version));
        }

        let snapshot: ProjectsSnapshot =
            serde_json::from_str(&contents).map_err(SnapshotStoreError::serialization)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &ProjectsSnapshot) -> SnapshotStoreResult<()> {
        let json =
            serde_json::to_string_pretty(snapshot).map_err(SnapshotStoreError::serialization)?;
        let temp_name = self.temp_file_name();
        self.dir
            .write(&temp_name, json)
            .map_err(SnapshotStoreError::persistence)?;
        self.dir
            .rename(&temp_name, &self.dir, &self.file_name)
            .map_err(SnapshotStoreError::persistence)?;
        tracing::debug!(file = %self.file_name, "snapshot file written");
        Ok(())
    }
}
