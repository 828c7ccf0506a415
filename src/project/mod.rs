//! Project and task tracking for a small team.
//!
//! A [`services::ProjectsManager`] holds uniquely titled projects; each
//! [`domain::Project`] owns an ordered list of tasks with priority, state and
//! a set-once assignee. Project state and last-updated dates are derived from
//! the tasks. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry and snapshot services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
