//! Utility modules
//!
//! - **error**: Error handling
//! - **format**: Display formatting helpers

pub mod error;
pub mod format;

pub use error::{EstimatorError, Result};
