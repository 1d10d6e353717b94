//! Error types for domain value validation

use thiserror::Error;

/// Errors raised by the value-object factories
///
/// Every factory in this crate reports invalid input through this enum
/// instead of panicking, so callers always branch on the outcome before a
/// value can be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not a canonically formatted UUID
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    /// Input is not a port number within 0-65535
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// Input is not a valid cloud template identifier
    #[error("Invalid Cloud Template ID: {0}")]
    InvalidCloudTemplateId(String),

    /// Input is not a valid tenant shortcode
    #[error("Invalid tenant: {0}")]
    InvalidTenant(String),
}

impl ValidationError {
    /// The raw input that failed validation
    pub fn offending_value(&self) -> &str {
        match self {
            Self::InvalidUuid(raw)
            | Self::InvalidPort(raw)
            | Self::InvalidCloudTemplateId(raw)
            | Self::InvalidTenant(raw) => raw,
        }
    }
}

/// Result type for value-object construction
pub type ValidationResult<T> = Result<T, ValidationError>;
