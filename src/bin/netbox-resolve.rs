// Copyright (c) 2025 - Cowboy AI, Inc.
//! NetBox Reference Resolution Diagnostic
//!
//! Resolves one reference value against a live NetBox, or checks whether
//! two values denote the same entity (the plan-diff suppression decision).
//!
//! Run with: cargo run --bin netbox-resolve -- tenant production-environment
//!
//! Prerequisites:
//! 1. NetBox API accessible (via NETBOX_URL environment variable)
//! 2. NetBox API token set (via NETBOX_API_TOKEN environment variable)

use anyhow::{bail, Context, Result};
use cim_netbox_sync::{
    NetBoxClient, NetBoxConfig, PlanDecision, PlanValue, ReferenceEquivalence, ReferenceResolver,
    ResourceKind,
};
use std::sync::Arc;
use tracing::info;

/// Configuration for the resolve diagnostic
#[derive(Debug, Clone)]
struct ResolveConfig {
    /// NetBox connection
    netbox: NetBoxConfig,
}

impl ResolveConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let netbox = NetBoxConfig {
            base_url: std::env::var("NETBOX_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            api_token: std::env::var("NETBOX_API_TOKEN").context("NETBOX_API_TOKEN not set")?,
            timeout_secs: std::env::var("NETBOX_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        };

        Ok(Self { netbox })
    }
}

fn known_kinds() -> String {
    ResourceKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (tag, value, prior) = match args.as_slice() {
        [tag, value] => (tag.as_str(), value.as_str(), None),
        [tag, value, prior] => (tag.as_str(), value.as_str(), Some(prior.as_str())),
        _ => {
            bail!(
                "Usage: netbox-resolve <kind> <value> [<prior-value>]\n\
                 Kinds: {}",
                known_kinds()
            );
        }
    };

    let Some(kind) = ResourceKind::from_tag(tag) else {
        bail!("Unknown kind '{}'. Kinds: {}", tag, known_kinds());
    };

    let config = ResolveConfig::from_env()?;
    info!("🚀 Resolving against NetBox at {}", config.netbox.base_url);

    let client = NetBoxClient::new(config.netbox).context("Failed to create NetBox client")?;
    client
        .health_check()
        .await
        .context("NetBox health check failed")?;
    info!("✅ Connected to NetBox");

    let resolver = ReferenceResolver::new(Arc::new(client));

    match prior {
        None => {
            let entity = resolver.resolve_entity(kind, value).await.with_context(|| {
                format!("Failed to resolve {} '{}'", kind.display_name(), value)
            })?;

            match entity {
                Some(entity) => println!(
                    "{} '{}' → ID {} (name: '{}', slug: {})",
                    kind.display_name(),
                    value,
                    entity.id,
                    entity.name,
                    entity
                        .slug
                        .as_deref()
                        .map(|s| format!("'{}'", s))
                        .unwrap_or_else(|| "none".to_string()),
                ),
                None => println!("Empty value: no reference to resolve"),
            }
        }
        Some(prior) => {
            let modifier = ReferenceEquivalence::new(resolver, kind);
            let decision = modifier
                .decide(&PlanValue::from(prior), &PlanValue::from(value))
                .await;

            match decision {
                PlanDecision::KeepState => println!(
                    "Equivalent: '{}' and '{}' denote the same {}; plan keeps '{}'",
                    prior,
                    value,
                    kind.display_name(),
                    prior,
                ),
                PlanDecision::UseConfig => println!(
                    "Changed: '{}' does not match prior '{}'; plan becomes '{}'",
                    value, prior, value,
                ),
            }
        }
    }

    Ok(())
}
