//! Integration tests
//!
//! Driven entirely through the crate's public API.

pub mod calculator_tests;
pub mod catalog_tests;
pub mod validation_tests;
