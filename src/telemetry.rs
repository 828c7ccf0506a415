//! Tracing subscriber setup for hosts embedding the tracker.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialised,
}

/// Builds the filter used by [`init_tracing`]: `RUST_LOG` when set, else
/// `fallback`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `RUST_LOG` is unset or
/// invalid and `fallback` does not parse.
pub fn env_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).map_err(|err| TelemetryError::InvalidFilter {
        directive: fallback.to_owned(),
        message: err.to_string(),
    })
}

/// Installs a formatted tracing subscriber for the process.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a bad fallback directive and
/// [`TelemetryError::AlreadyInitialised`] when called more than once.
pub fn init_tracing(fallback: &str) -> Result<(), TelemetryError> {
    let filter = env_filter(fallback)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialised)
}
