//! Worktrack: project and task tracking for a small team.
//!
//! This crate provides the domain model behind a single-user project
//! tracker: a registry of uniquely titled projects, each owning an ordered
//! list of prioritised, assignable tasks.
//!
//! # Architecture
//!
//! Worktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (JSON files, memory)
//!
//! # Modules
//!
//! - [`project`]: Projects, tasks, matchers and snapshot persistence
//! - [`config`]: Layered runtime configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod project;
pub mod telemetry;
