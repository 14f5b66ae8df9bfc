// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reference Resolver
//!
//! Thin façade over the lookup engine working in raw attribute values and
//! resource-type tags, the currency of the plan modifiers. Cheap to clone
//! and safe to share across attributes; holds nothing but the injected
//! client.

use std::sync::Arc;
use tracing::debug;

use crate::client::{EntitySummary, InventoryClient};
use crate::errors::LookupResult;
use crate::lookup::{LookupEngine, Reference};
use crate::registry::ResourceKind;

/// Outcome of resolving one attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The value was empty: no reference at all
    Empty,
    /// The resource-type tag is outside the registry; resolution was skipped
    Unsupported,
    /// The canonical numeric ID the value denotes
    Id(i64),
}

impl Resolution {
    /// The canonical ID, when the value resolved to one
    pub fn id(&self) -> Option<i64> {
        match self {
            Resolution::Id(id) => Some(*id),
            _ => None,
        }
    }
}

/// Shared entry point for resolving reference attribute values
#[derive(Clone)]
pub struct ReferenceResolver {
    engine: LookupEngine,
}

impl ReferenceResolver {
    /// Create a resolver over the given inventory client
    pub fn new(client: Arc<dyn InventoryClient>) -> Self {
        Self {
            engine: LookupEngine::new(client),
        }
    }

    /// Resolve a raw attribute value for a known kind
    pub async fn resolve(&self, kind: ResourceKind, value: &str) -> LookupResult<Resolution> {
        match Reference::parse(value) {
            None => Ok(Resolution::Empty),
            Some(reference) => {
                let id = self.engine.resolve(kind, &reference).await?;
                Ok(Resolution::Id(id))
            }
        }
    }

    /// Resolve a raw attribute value for a resource-type tag
    ///
    /// Tags outside the registry are skipped (`Unsupported`), never an
    /// error, so attributes of unrelated types fall back to ordinary
    /// comparison.
    pub async fn resolve_tag(&self, tag: &str, value: &str) -> LookupResult<Resolution> {
        match ResourceKind::from_tag(tag) {
            Some(kind) => self.resolve(kind, value).await,
            None => {
                debug!("Tag '{}' is not a registered resource kind; skipping resolution", tag);
                Ok(Resolution::Unsupported)
            }
        }
    }

    /// Resolve a raw attribute value to the full entity summary
    ///
    /// `Ok(None)` for empty input. Numeric references are fetched here so
    /// the caller can see the entity's slug and name.
    pub async fn resolve_entity(
        &self,
        kind: ResourceKind,
        value: &str,
    ) -> LookupResult<Option<EntitySummary>> {
        match Reference::parse(value) {
            None => Ok(None),
            Some(reference) => Ok(Some(self.engine.find(kind, &reference).await?)),
        }
    }
}
