// Copyright (c) 2025 - Cowboy AI, Inc.
//! Generic Lookup Engine
//!
//! Resolves a single reference value to its canonical numeric ID through
//! one uniform path for every resource kind:
//!
//! ```text
//! "7"                      → ID 7 (already canonical, zero client calls)
//! "production-environment" → slug filter → ID
//! "Production Environment" → slug filter (miss) → name filter → ID
//! ```
//!
//! Zero matches after the fallback is `NotFound`; more than one match at
//! any step is `Ambiguous` and the caller is told to use the numeric ID.
//! A match is never picked silently. The engine performs at most one
//! logical resolution per call and caches nothing.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::client::{EntitySummary, FilterField, InventoryClient};
use crate::errors::{LookupError, LookupResult};
use crate::registry::ResourceKind;

/// A reference value, parsed once at the boundary
///
/// Configurations may point at an entity by canonical ID or by a textual
/// key (slug or name). The empty string means "no reference" and parses to
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// Canonical numeric ID
    Id(i64),
    /// Textual key: slug or name, decided during lookup
    Key(String),
}

impl Reference {
    /// Parse a raw attribute value
    ///
    /// Empty input is no reference at all. Anything that parses as a
    /// base-10 integer is an ID; everything else is a textual key.
    pub fn parse(raw: &str) -> Option<Reference> {
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i64>() {
            Ok(id) => Some(Reference::Id(id)),
            Err(_) => Some(Reference::Key(raw.to_string())),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Id(id) => write!(f, "{}", id),
            Reference::Key(key) => write!(f, "{}", key),
        }
    }
}

/// Resolves references against an injected inventory client
#[derive(Clone)]
pub struct LookupEngine {
    client: Arc<dyn InventoryClient>,
}

impl LookupEngine {
    /// Create an engine over the given client
    pub fn new(client: Arc<dyn InventoryClient>) -> Self {
        Self { client }
    }

    /// Resolve a reference to its canonical numeric ID
    ///
    /// Numeric references resolve to themselves without touching the
    /// client; existence of the ID is the API's concern at apply time.
    pub async fn resolve(&self, kind: ResourceKind, reference: &Reference) -> LookupResult<i64> {
        match reference {
            Reference::Id(id) => Ok(*id),
            Reference::Key(key) => Ok(self.find_by_key(kind, key).await?.id),
        }
    }

    /// Resolve a reference to the full entity summary
    ///
    /// Unlike [`resolve`](Self::resolve), a numeric reference is fetched so
    /// the caller gets the entity's name and slug; a dangling ID is
    /// `NotFound` here.
    pub async fn find(
        &self,
        kind: ResourceKind,
        reference: &Reference,
    ) -> LookupResult<EntitySummary> {
        match reference {
            Reference::Id(id) => match self.client.get_by_id(kind, *id).await? {
                Some(entity) => Ok(entity),
                None => Err(LookupError::NotFound {
                    kind,
                    value: id.to_string(),
                }),
            },
            Reference::Key(key) => self.find_by_key(kind, key).await,
        }
    }

    /// Filter cascade for textual keys: slug first (when the kind has
    /// slugs), then the kind's name parameter
    async fn find_by_key(&self, kind: ResourceKind, key: &str) -> LookupResult<EntitySummary> {
        let descriptor = kind.descriptor();

        if descriptor.has_slug {
            let matches = self.client.list_by_field(kind, FilterField::Slug, key).await?;
            if let Some(entity) = single_match(kind, key, matches)? {
                debug!(
                    "Resolved {} '{}' to ID {} via slug",
                    descriptor.display, key, entity.id
                );
                return Ok(entity);
            }
        }

        let matches = self.client.list_by_field(kind, FilterField::Name, key).await?;
        match single_match(kind, key, matches)? {
            Some(entity) => {
                debug!(
                    "Resolved {} '{}' to ID {} via {}",
                    descriptor.display, key, entity.id, descriptor.name_param
                );
                Ok(entity)
            }
            None => Err(LookupError::NotFound {
                kind,
                value: key.to_string(),
            }),
        }
    }
}

/// Zero matches fall through (`None`); one match wins; several are an error
fn single_match(
    kind: ResourceKind,
    key: &str,
    mut matches: Vec<EntitySummary>,
) -> LookupResult<Option<EntitySummary>> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches.swap_remove(0))),
        n => Err(LookupError::Ambiguous {
            kind,
            value: key.to_string(),
            matches: n,
        }),
    }
}
