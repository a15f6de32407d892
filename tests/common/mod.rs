//! Common test utilities for convocost
//!
//! Shared infrastructure for the integration tests: scenario fixtures
//! and float-comparison assertions.

pub mod assertions;
pub mod fixtures;
