// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Value-Object Factories
//!
//! These tests prove the construction contract for all inputs: every
//! factory call returns exactly one outcome without panicking, inputs
//! satisfying the predicate construct the normalized value, and rejected
//! inputs surface the raw text verbatim in the failure.

use cloud_domain::{CloudTemplateId, Port, Tenant, Uuid, ValidationError};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Generate canonically grouped UUID text in mixed case
fn uuid_text() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}"
}

/// Generate tenant shortcodes within the allowed alphabet and length
fn tenant_text() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,63}"
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: UUID construction is total
    ///
    /// For any string the factory returns exactly one outcome, agrees with
    /// the public predicate, and rejections carry the input verbatim.
    #[test]
    fn prop_uuid_totality(input in any::<String>()) {
        match Uuid::new(input.clone()) {
            Ok(uuid) => {
                prop_assert!(Uuid::is_valid(&input), "accepted input must satisfy predicate");
                prop_assert_eq!(uuid.as_str(), input.to_lowercase());
            }
            Err(err) => {
                prop_assert!(!Uuid::is_valid(&input), "rejected input must fail predicate");
                prop_assert!(matches!(err, ValidationError::InvalidUuid(_)));
                prop_assert_eq!(err.offending_value(), input);
            }
        }
    }

    /// Property: canonical UUID text always constructs
    #[test]
    fn prop_uuid_soundness(input in uuid_text()) {
        let uuid = Uuid::new(input.clone());
        prop_assert!(uuid.is_ok(), "canonical grouping must be accepted");
        let uuid = uuid.unwrap();
        prop_assert_eq!(uuid.as_str(), input.to_lowercase());
    }

    /// Property: normalization is idempotent across casing
    ///
    /// Upper- and lower-case spellings of one UUID yield equal values.
    #[test]
    fn prop_uuid_case_idempotence(input in uuid_text()) {
        let upper = Uuid::new(input.to_uppercase());
        let lower = Uuid::new(input.to_lowercase());
        prop_assert_eq!(upper, lower, "case variants must construct equal values");
    }

    /// Property: every in-range number is a valid port
    #[test]
    fn prop_port_accepts_range(n in 0u32..=65535) {
        let port = Port::new(n.to_string());
        prop_assert!(port.is_ok(), "in-range number must be accepted");
        prop_assert_eq!(port.unwrap().number(), n as u16);
    }

    /// Property: out-of-range numbers are rejected with the exact message
    #[test]
    fn prop_port_rejects_out_of_range(n in 65536u64..10_000_000) {
        let err = Port::new(n.to_string());
        prop_assert!(err.is_err(), "out-of-range number must be rejected");
        prop_assert_eq!(
            err.unwrap_err().to_string(),
            format!("Invalid port: {}", n)
        );
    }

    /// Property: port construction is total and never panics
    #[test]
    fn prop_port_totality(input in any::<String>()) {
        match Port::new(input.clone()) {
            Ok(port) => {
                prop_assert_eq!(port.as_str(), &input, "accepted text must be preserved");
                prop_assert!(input.bytes().all(|b| b.is_ascii_digit()));
            }
            Err(err) => {
                prop_assert!(matches!(err, ValidationError::InvalidPort(_)));
                prop_assert_eq!(err.offending_value(), input);
            }
        }
    }

    /// Property: template id validity matches UUID validity
    ///
    /// Composition delegates the predicate; only the failure wording differs.
    #[test]
    fn prop_template_id_matches_uuid(input in any::<String>()) {
        let template = CloudTemplateId::new(input.clone());
        let uuid = Uuid::new(input.clone());
        prop_assert_eq!(template.is_ok(), uuid.is_ok(), "validity conditions must agree");

        if let (Err(template_err), Err(uuid_err)) = (template, uuid) {
            prop_assert!(matches!(template_err, ValidationError::InvalidCloudTemplateId(_)));
            prop_assert_ne!(template_err.to_string(), uuid_err.to_string());
        }
    }

    /// Property: canonical UUID text constructs a template id
    #[test]
    fn prop_template_id_soundness(input in uuid_text()) {
        let template = CloudTemplateId::new(input.clone());
        prop_assert!(template.is_ok());
        let template = template.unwrap();
        prop_assert_eq!(template.as_str(), input.to_lowercase());
    }

    /// Property: tenant construction is total
    #[test]
    fn prop_tenant_totality(input in any::<String>()) {
        match Tenant::new(input.clone()) {
            Ok(tenant) => prop_assert_eq!(tenant.as_str(), &input),
            Err(err) => {
                prop_assert!(matches!(err, ValidationError::InvalidTenant(_)));
                prop_assert_eq!(err.offending_value(), input);
            }
        }
    }

    /// Property: well-formed shortcodes always construct, unchanged
    #[test]
    fn prop_tenant_accepts_shortcodes(input in tenant_text()) {
        let tenant = Tenant::new(input.clone());
        prop_assert!(tenant.is_ok(), "shortcode alphabet must be accepted");
        let tenant = tenant.unwrap();
        prop_assert_eq!(tenant.as_str(), input);
    }
}
