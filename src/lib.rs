//! Always-valid domain value objects for cloud automation services
//!
//! Every type in this crate is a validated value object: the only route to
//! an instance is a factory that checks the raw input and returns an
//! explicit [`ValidationResult`]. Code that accepts these types instead of
//! plain strings can therefore never observe an invalid value.
//!
//! # Value Objects with Invariants
//!
//! - [`Uuid`] - canonical 8-4-4-4-12 UUID text, lowercased
//! - [`Port`] - network port text within 0-65535
//! - [`CloudTemplateId`] - template identifier composed over [`Uuid`]
//! - [`Tenant`] - tenant shortcode (lowercase alphanumeric)
//!
//! Validation is pure and synchronous; instances are immutable and freely
//! shareable across threads.

pub mod cloud_template_id;
pub mod errors;
pub mod port;
pub mod tenant;
pub mod uuid;

// Re-export commonly used types
pub use crate::cloud_template_id::CloudTemplateId;
pub use crate::errors::{ValidationError, ValidationResult};
pub use crate::port::Port;
pub use crate::tenant::Tenant;
pub use crate::uuid::Uuid;
