// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Value Validator
//!
//! Validates raw values against the domain value objects and reports each
//! outcome, exiting nonzero if any value is invalid.
//!
//! Run with: cargo run --bin validate -- <kind> <value>...
//!
//! Kinds: uuid, port, cloud-template-id, tenant

use anyhow::{bail, Result};
use cloud_domain::{CloudTemplateId, Port, Tenant, Uuid};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let kind = match args.next() {
        Some(kind) => kind,
        None => bail!("usage: validate <uuid|port|cloud-template-id|tenant> <value>..."),
    };

    let mut failures = 0usize;
    let mut total = 0usize;
    for value in args {
        total += 1;
        let outcome = match kind.as_str() {
            "uuid" => Uuid::new(value).map(|v| v.to_string()),
            "port" => Port::new(value).map(|v| v.to_string()),
            "cloud-template-id" => CloudTemplateId::new(value).map(|v| v.to_string()),
            "tenant" => Tenant::new(value).map(|v| v.to_string()),
            other => bail!("unknown kind: {}", other),
        };

        match outcome {
            Ok(normalized) => println!("ok       {}", normalized),
            Err(err) => {
                failures += 1;
                println!("invalid  {}", err);
            }
        }
    }

    if total == 0 {
        bail!("no values supplied");
    }

    if failures > 0 {
        bail!("{} of {} value(s) failed validation", failures, total);
    }

    info!("all {} value(s) valid", total);
    Ok(())
}
