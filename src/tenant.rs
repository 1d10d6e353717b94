// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tenant Shortcode Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::errors::{ValidationError, ValidationResult};

/// Tenant shortcode value object
///
/// Represents the short code identifying a tenant (e.g. `int22ec9bac7`),
/// as opposed to the full tenant URL, with invariants:
/// - Non-empty, at most 63 characters
/// - ASCII lowercase letters and digits only
///
/// Anything carrying a scheme, dots or slashes is a tenant URL, not a
/// shortcode, and is rejected here.
///
/// # Examples
///
/// ```rust
/// use cloud_domain::Tenant;
///
/// let tenant = Tenant::new("int22ec9bac7").unwrap();
/// assert_eq!(tenant.as_str(), "int22ec9bac7");
///
/// assert!(Tenant::new("https://int22ec9bac7.example.cloud/").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tenant(String);

impl Tenant {
    /// Maximum shortcode length
    pub const MAX_LENGTH: usize = 63;

    /// Create a new tenant shortcode with validation
    ///
    /// # Invariants
    /// - Non-empty, at most 63 characters
    /// - ASCII lowercase alphanumeric only
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        if !Self::is_valid(&value) {
            trace!(value = %value, "rejected tenant");
            return Err(ValidationError::InvalidTenant(value));
        }

        Ok(Self(value))
    }

    fn is_valid(value: &str) -> bool {
        !value.is_empty()
            && value.len() <= Self::MAX_LENGTH
            && value
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    }

    /// Get the shortcode as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Tenant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tenant {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Tenant {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Tenant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
