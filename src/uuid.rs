// Copyright (c) 2025 - Cowboy AI, Inc.
//! UUID Value Object with Canonical-Format Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::errors::{ValidationError, ValidationResult};

/// Canonically formatted UUID value object
///
/// Represents a UUID in the canonical 8-4-4-4-12 hexadecimal grouping with
/// invariants:
/// - Exactly 36 characters, hyphens at offsets 8, 13, 18 and 23
/// - Every other character is a hexadecimal digit (either case accepted)
/// - Stored lowercased, so two spellings of the same UUID compare equal
///
/// # Examples
///
/// ```rust
/// use cloud_domain::Uuid;
///
/// let id = Uuid::new("D5DF3D22-C22A-942A-F0CA-C883442ED1FB").unwrap();
/// assert_eq!(id.as_str(), "d5df3d22-c22a-942a-f0ca-c883442ed1fb");
///
/// // Invalid inputs
/// assert!(Uuid::new("not-a-uuid").is_err());
/// assert!(Uuid::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid(String);

impl Uuid {
    /// Length of the canonical textual form
    pub const LENGTH: usize = 36;

    /// Byte offsets of the group separators in the canonical form
    const HYPHENS: [usize; 4] = [8, 13, 18, 23];

    /// Create a new UUID with validation
    ///
    /// # Invariants
    /// - Canonical 8-4-4-4-12 grouping
    /// - Hexadecimal digits only
    /// - Value normalized to lowercase
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        if !Self::is_valid(&value) {
            trace!(value = %value, "rejected UUID");
            return Err(ValidationError::InvalidUuid(value));
        }

        Ok(Self(value.to_lowercase()))
    }

    /// Check whether a string is a canonically grouped UUID
    ///
    /// Case-insensitive. Accepts exactly the hyphenated 8-4-4-4-12 layout;
    /// braced, URN and un-hyphenated spellings are rejected.
    pub fn is_valid(value: &str) -> bool {
        if value.len() != Self::LENGTH {
            return false;
        }

        value.bytes().enumerate().all(|(i, byte)| {
            if Self::HYPHENS.contains(&i) {
                byte == b'-'
            } else {
                byte.is_ascii_hexdigit()
            }
        })
    }

    /// Get the UUID as a string slice (lowercase canonical form)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Uuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<::uuid::Uuid> for Uuid {
    fn from(value: ::uuid::Uuid) -> Self {
        // The hyphenated encoding is already canonical lowercase.
        Self(value.as_hyphenated().to_string())
    }
}

impl TryFrom<String> for Uuid {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Uuid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
