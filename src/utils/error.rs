//! Error types for the cost estimation engine
//!
//! All failures are deterministic and non-retryable: the same inputs always
//! produce the same error, and callers recover by correcting their input.

use thiserror::Error;

use crate::core::types::selection::{ModelRole, ModelType};

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Estimation errors
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// A required session parameter is absent or zero
    #[error("Missing required input: {field}")]
    MissingInput { field: &'static str },

    /// The model-type identifier is outside the closed set of six variants
    #[error("Unknown model type: {value}")]
    UnknownModelType { value: String },

    /// A selected model identifier has no entry in its pricing table
    #[error("Unknown model '{model}' in {table} pricing table")]
    UnknownModel { model: String, table: &'static str },

    /// A role required by the model type has no selected model
    #[error("No {role} model selected for model type {model_type}")]
    IncompleteModelSelection {
        role: ModelRole,
        model_type: ModelType,
    },

    /// Session inputs do not match the chosen model type
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Catalog configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimatorError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
