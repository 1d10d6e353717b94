// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Template Identifier Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ValidationError, ValidationResult};
use crate::uuid::Uuid;

/// Cloud template identifier value object
///
/// Identifies a cloud template (the provider-internal "blueprint") and is
/// composed over [`Uuid`]: the factory delegates to [`Uuid::new`], so a
/// template id is valid exactly when its text is a canonical UUID. The
/// failure carries domain wording rather than the underlying UUID message.
///
/// # Examples
///
/// ```rust
/// use cloud_domain::CloudTemplateId;
///
/// let id = CloudTemplateId::new("774b5e5b-2825-d2b9-62e7-03da188ef2cd").unwrap();
/// assert_eq!(id.as_str(), "774b5e5b-2825-d2b9-62e7-03da188ef2cd");
///
/// let err = CloudTemplateId::new("not-an-id").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid Cloud Template ID: not-an-id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CloudTemplateId(Uuid);

impl CloudTemplateId {
    /// Create a new cloud template id with validation
    ///
    /// Short-circuits on the underlying UUID validation and surfaces a
    /// single top-level failure.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        Uuid::new(value).map(Self).map_err(|err| match err {
            ValidationError::InvalidUuid(raw) => ValidationError::InvalidCloudTemplateId(raw),
            other => other,
        })
    }

    /// Get the validated UUID this identifier wraps
    pub fn uuid(&self) -> &Uuid {
        &self.0
    }

    /// Get the identifier as a string slice (lowercase canonical form)
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CloudTemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CloudTemplateId {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<::uuid::Uuid> for CloudTemplateId {
    fn from(value: ::uuid::Uuid) -> Self {
        Self(Uuid::from(value))
    }
}

impl From<Uuid> for CloudTemplateId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for CloudTemplateId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CloudTemplateId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for CloudTemplateId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
