//! Identifier types for projects and tasks.
//!
//! Both identifiers are plain sequential integers handed out by the owning
//! aggregate. Neither type exposes arithmetic beyond [`next`](ProjectId::next)
//! so counters can only move forward. `next` stops at `u32::MAX` instead of
//! wrapping or saturating, so the last value is never handed out twice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry-wide project identifier, allocated from 1 upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    /// First identifier handed out by an empty registry.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` when the
    /// identifier space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project-scoped task identifier, allocated from 0 upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    /// First identifier handed out by a project without tasks.
    pub const FIRST: Self = Self(0);

    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` when the
    /// identifier space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
