//! Step definitions for project tracking behaviour scenarios.

pub mod when;
pub mod world;
