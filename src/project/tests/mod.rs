//! Unit tests for the project tracking module.
