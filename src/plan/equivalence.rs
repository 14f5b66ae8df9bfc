// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reference Equivalence Plan Modifier
//!
//! Decides, for one reference attribute, whether the prior state and the
//! configuration denote the same remote entity. When they do, the diff is
//! suppressed and the plan keeps the state's representation exactly as
//! persisted:
//!
//! ```text
//! state "7"   config "production-environment"
//!     \              /
//!   resolve      resolve
//!     \              /
//!    ID 7   ==   ID 7      →  planned value stays "7", no diff
//! ```
//!
//! The comparison is deliberately one-sided about failure: anything that
//! prevents a confident "same entity" verdict (null or unknown values,
//! unregistered kinds, empty references, lookup failures) reports a change.
//! A spurious diff is recoverable; a wrongly suppressed one is not.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::LookupResult;
use crate::plan::{AttributeModifier, PlanDecision, PlanValue};
use crate::registry::ResourceKind;
use crate::resolver::ReferenceResolver;

/// Suppresses diffs between equivalent representations of one reference
pub struct ReferenceEquivalence {
    kind: Option<ResourceKind>,
    resolver: ReferenceResolver,
}

impl ReferenceEquivalence {
    /// Build the modifier for a known resource kind
    pub fn new(resolver: ReferenceResolver, kind: ResourceKind) -> Self {
        Self {
            kind: Some(kind),
            resolver,
        }
    }

    /// Build the modifier from a resource-type tag
    ///
    /// Unregistered tags disable equivalence for the attribute; values then
    /// compare as ordinary strings.
    pub fn from_tag(resolver: ReferenceResolver, tag: &str) -> Self {
        let kind = ResourceKind::from_tag(tag);
        if kind.is_none() {
            debug!(
                "Tag '{}' is not a registered resource kind; equivalence will be skipped",
                tag
            );
        }
        Self { kind, resolver }
    }

    /// Decide whether the config value is a real change over the state
    pub async fn decide(
        &self,
        state: &PlanValue<String>,
        config: &PlanValue<String>,
    ) -> PlanDecision {
        // Create, destroy, and deferred values: nothing safe to compare.
        let (Some(state_value), Some(config_value)) = (state.as_value(), config.as_value())
        else {
            return PlanDecision::UseConfig;
        };

        // Identical strings need no resolution; this also covers two empty
        // references.
        if state_value == config_value {
            return PlanDecision::KeepState;
        }

        let Some(kind) = self.kind else {
            return PlanDecision::UseConfig;
        };

        match self.same_entity(kind, state_value, config_value).await {
            Ok(true) => {
                debug!(
                    "{}: '{}' and '{}' denote the same entity; suppressing diff",
                    kind.display_name(),
                    state_value,
                    config_value
                );
                PlanDecision::KeepState
            }
            Ok(false) => PlanDecision::UseConfig,
            Err(err) => {
                // No confident verdict; the diff stays visible.
                debug!(
                    "{}: equivalence check failed ({}); treating '{}' as a change",
                    kind.display_name(),
                    err,
                    config_value
                );
                PlanDecision::UseConfig
            }
        }
    }

    async fn same_entity(
        &self,
        kind: ResourceKind,
        state_value: &str,
        config_value: &str,
    ) -> LookupResult<bool> {
        let state_resolution = self.resolver.resolve(kind, state_value).await?;
        let config_resolution = self.resolver.resolve(kind, config_value).await?;
        match (state_resolution.id(), config_resolution.id()) {
            (Some(state_id), Some(config_id)) => Ok(state_id == config_id),
            // An empty reference is never equivalent to anything else
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl AttributeModifier<String> for ReferenceEquivalence {
    async fn plan(
        &self,
        state: &PlanValue<String>,
        config: &PlanValue<String>,
        proposed: &PlanValue<String>,
    ) -> PlanValue<String> {
        match self.decide(state, config).await {
            PlanDecision::KeepState => state.clone(),
            PlanDecision::UseConfig => proposed.clone(),
        }
    }
}
