// Copyright (c) 2025 - Cowboy AI, Inc.
//! Port Value Object with Range Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::errors::{ValidationError, ValidationResult};

/// Network port value object
///
/// Represents a TCP/UDP port given as text with invariants:
/// - Non-empty, ASCII digits only (no sign, no whitespace)
/// - Numeric value within 0-65535
/// - Input text preserved as written (`"08080"` stays `"08080"`)
///
/// # Examples
///
/// ```rust
/// use cloud_domain::Port;
///
/// let port = Port::new("8080").unwrap();
/// assert_eq!(port.as_str(), "8080");
/// assert_eq!(port.number(), 8080);
///
/// // Invalid ports
/// assert!(Port::new("70000").is_err());
/// assert!(Port::new("http").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(String);

impl Port {
    /// Highest valid port number
    pub const MAX: u16 = 65535;

    /// Create a new port with validation
    ///
    /// # Invariants
    /// - ASCII digits only
    /// - Numeric value 0-65535
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        if !Self::is_valid(&value) {
            trace!(value = %value, "rejected port");
            return Err(ValidationError::InvalidPort(value));
        }

        Ok(Self(value))
    }

    /// Check the digits-only and range invariants
    fn is_valid(value: &str) -> bool {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        // Digits only at this point, so a parse failure can only mean overflow.
        value
            .parse::<u32>()
            .is_ok_and(|n| n <= u32::from(Self::MAX))
    }

    /// Get the port as the originally supplied string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the numeric port value
    pub fn number(&self) -> u16 {
        self.0.parse().expect("digits and range checked at construction")
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Port {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        // Every u16 is within range by type.
        Self(value.to_string())
    }
}

impl TryFrom<String> for Port {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Port {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Port {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
