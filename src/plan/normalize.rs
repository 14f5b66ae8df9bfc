// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reference Normalization Modifiers
//!
//! Optional plan modifiers that rewrite a resolvable reference into a
//! preferred representation: the canonical numeric ID, or the slug. Both
//! are advisory. Any value they cannot confidently rewrite (empty,
//! unregistered kind, unresolvable, lookup failure) passes through
//! untouched; a normalizer never fails a plan.

use async_trait::async_trait;
use tracing::debug;

use crate::plan::{AttributeModifier, PlanValue};
use crate::registry::ResourceKind;
use crate::resolver::{ReferenceResolver, Resolution};

/// Rewrites textual references to their canonical numeric ID
pub struct ResolveToId {
    kind: Option<ResourceKind>,
    resolver: ReferenceResolver,
}

impl ResolveToId {
    /// Build the modifier for a known resource kind
    pub fn new(resolver: ReferenceResolver, kind: ResourceKind) -> Self {
        Self {
            kind: Some(kind),
            resolver,
        }
    }

    /// Build the modifier from a resource-type tag; unregistered tags make
    /// it a no-op
    pub fn from_tag(resolver: ReferenceResolver, tag: &str) -> Self {
        Self {
            kind: ResourceKind::from_tag(tag),
            resolver,
        }
    }
}

#[async_trait]
impl AttributeModifier<String> for ResolveToId {
    async fn plan(
        &self,
        _state: &PlanValue<String>,
        _config: &PlanValue<String>,
        proposed: &PlanValue<String>,
    ) -> PlanValue<String> {
        let Some(kind) = self.kind else {
            return proposed.clone();
        };
        let Some(value) = proposed.as_value() else {
            return proposed.clone();
        };

        match self.resolver.resolve(kind, value).await {
            Ok(Resolution::Id(id)) => PlanValue::Value(id.to_string()),
            Ok(_) => proposed.clone(),
            Err(err) => {
                debug!(
                    "{}: cannot normalize '{}' to an ID ({}); leaving value as-is",
                    kind.display_name(),
                    value,
                    err
                );
                proposed.clone()
            }
        }
    }
}

/// Rewrites references to the entity's slug, falling back to its name
pub struct PreferSlug {
    kind: Option<ResourceKind>,
    resolver: ReferenceResolver,
}

impl PreferSlug {
    /// Build the modifier for a known resource kind
    pub fn new(resolver: ReferenceResolver, kind: ResourceKind) -> Self {
        Self {
            kind: Some(kind),
            resolver,
        }
    }

    /// Build the modifier from a resource-type tag; unregistered tags make
    /// it a no-op
    pub fn from_tag(resolver: ReferenceResolver, tag: &str) -> Self {
        Self {
            kind: ResourceKind::from_tag(tag),
            resolver,
        }
    }
}

#[async_trait]
impl AttributeModifier<String> for PreferSlug {
    async fn plan(
        &self,
        _state: &PlanValue<String>,
        _config: &PlanValue<String>,
        proposed: &PlanValue<String>,
    ) -> PlanValue<String> {
        let Some(kind) = self.kind else {
            return proposed.clone();
        };
        let Some(value) = proposed.as_value() else {
            return proposed.clone();
        };

        match self.resolver.resolve_entity(kind, value).await {
            Ok(Some(entity)) => {
                if let Some(slug) = entity.slug.filter(|s| !s.is_empty()) {
                    PlanValue::Value(slug)
                } else if !entity.name.is_empty() {
                    PlanValue::Value(entity.name)
                } else {
                    proposed.clone()
                }
            }
            Ok(None) => proposed.clone(),
            Err(err) => {
                debug!(
                    "{}: cannot normalize '{}' to a slug ({}); leaving value as-is",
                    kind.display_name(),
                    value,
                    err
                );
                proposed.clone()
            }
        }
    }
}
