//! Core estimation logic
//!
//! Pure calculation: no I/O happens below this module. Everything here
//! is a function of the session inputs, the model selection, and the
//! pricing catalog.

pub mod calculator;
pub mod types;

pub use calculator::calculate;
