//! Configuration error types.

use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Configuration failed one or more validation rules
    #[error("Configuration validation failed with {} violation(s)", .violations.len())]
    ValidationFailed { violations: Vec<ConfigViolation> },
}
