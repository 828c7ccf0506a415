//! Runtime configuration for hosts embedding the tracker.
//!
//! Values are layered, highest priority first:
//! 1. Environment variables (`WORKTRACK_DATA_DIR`, `WORKTRACK_SNAPSHOT_FILE`,
//!    `WORKTRACK_LOG`)
//! 2. TOML config file
//! 3. Compiled defaults

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::io;
use thiserror::Error;

/// Environment variable overriding the snapshot directory.
pub const DATA_DIR_ENV: &str = "WORKTRACK_DATA_DIR";
/// Environment variable overriding the snapshot file name.
pub const SNAPSHOT_FILE_ENV: &str = "WORKTRACK_SNAPSHOT_FILE";
/// Environment variable overriding the log filter directive.
pub const LOG_FILTER_ENV: &str = "WORKTRACK_LOG";

const DEFAULT_SNAPSHOT_FILE: &str = "projects.json";
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The snapshot file name resolved to an empty string.
    #[error("snapshot file name must not be empty")]
    EmptySnapshotFile,
}

/// Source of environment variables, injectable for tests.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when unset or not UTF-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Top-level TOML config file structure. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TrackerConfigFile {
    storage: StorageFileConfig,
    logging: LoggingFileConfig,
}

/// `[storage]` section of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    data_dir: Option<String>,
    snapshot_file: Option<String>,
}

/// `[logging]` section of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoggingFileConfig {
    filter: Option<String>,
}

/// Fully resolved tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    data_dir: Utf8PathBuf,
    snapshot_file: String,
    log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from("."),
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl TrackerConfig {
    /// Loads the config file at `path` (a missing file counts as empty) and
    /// applies environment overrides from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed, or when the resolved snapshot file name is empty.
    pub fn load(path: &Utf8Path, env: &impl EnvSource) -> Result<Self, ConfigError> {
        let contents = match read_optional(path) {
            Ok(contents) => contents.unwrap_or_default(),
            Err(source) => {
                return Err(ConfigError::ReadFile {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        Self::from_toml_str(&contents)?.with_env(env)
    }

    /// Parses a TOML document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed TOML and
    /// [`ConfigError::EmptySnapshotFile`] for an empty snapshot file name.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: TrackerConfigFile = toml::from_str(contents)?;
        let defaults = Self::default();
        Self {
            data_dir: file
                .storage
                .data_dir
                .map_or(defaults.data_dir, Utf8PathBuf::from),
            snapshot_file: file.storage.snapshot_file.unwrap_or(defaults.snapshot_file),
            log_filter: file.logging.filter.unwrap_or(defaults.log_filter),
        }
        .validated()
    }

    /// Applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySnapshotFile`] when the override empties
    /// the snapshot file name.
    pub fn with_env(self, env: &impl EnvSource) -> Result<Self, ConfigError> {
        Self {
            data_dir: env
                .var(DATA_DIR_ENV)
                .map_or(self.data_dir, Utf8PathBuf::from),
            snapshot_file: env.var(SNAPSHOT_FILE_ENV).unwrap_or(self.snapshot_file),
            log_filter: env.var(LOG_FILTER_ENV).unwrap_or(self.log_filter),
        }
        .validated()
    }

    /// Directory holding the snapshot file.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Snapshot file name inside [`data_dir`](Self::data_dir).
    #[must_use]
    pub fn snapshot_file(&self) -> &str {
        &self.snapshot_file
    }

    /// Log filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Full path of the snapshot file.
    #[must_use]
    pub fn snapshot_path(&self) -> Utf8PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.snapshot_file.trim().is_empty() {
            return Err(ConfigError::EmptySnapshotFile);
        }
        Ok(self)
    }
}

/// Reads `path` through its parent directory, returning `None` when the file
/// does not exist.
fn read_optional(path: &Utf8Path) -> io::Result<Option<String>> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("config path must include a file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = match Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
