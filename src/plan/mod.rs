// Copyright (c) 2025 - Cowboy AI, Inc.
//! Plan-Phase Attribute Model
//!
//! The reconciliation engine hands each attribute modifier three values:
//! the prior state, the raw configuration, and its own proposed plan. The
//! modifier returns the adjusted plan. Everything here is advisory; a
//! modifier adjusts the plan or leaves it alone, it never aborts one.
//!
//! Attribute values are three-state (`Null` / `Unknown` / `Value`):
//! absent, not known until apply, or concrete.

pub mod custom_fields;
pub mod equivalence;
pub mod normalize;

pub use custom_fields::{merge_custom_fields, CustomField, CustomFieldsMerge};
pub use equivalence::ReferenceEquivalence;
pub use normalize::{PreferSlug, ResolveToId};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Three-state attribute value as seen during plan evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanValue<T> {
    /// The attribute is absent
    Null,
    /// The value is not known until apply
    Unknown,
    /// A concrete value
    Value(T),
}

impl<T> PlanValue<T> {
    /// True when the attribute is absent
    pub fn is_null(&self) -> bool {
        matches!(self, PlanValue::Null)
    }

    /// True when the value is deferred to apply
    pub fn is_unknown(&self) -> bool {
        matches!(self, PlanValue::Unknown)
    }

    /// Null or unknown: nothing concrete to compare against
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, PlanValue::Null | PlanValue::Unknown)
    }

    /// The concrete value, if there is one
    pub fn as_value(&self) -> Option<&T> {
        match self {
            PlanValue::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consume into the concrete value, if there is one
    pub fn into_value(self) -> Option<T> {
        match self {
            PlanValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for PlanValue<T> {
    fn from(value: T) -> Self {
        PlanValue::Value(value)
    }
}

impl From<&str> for PlanValue<String> {
    fn from(value: &str) -> Self {
        PlanValue::Value(value.to_string())
    }
}

/// Which side a reference comparison keeps for an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanDecision {
    /// Prior state and config denote the same entity: keep the state's
    /// representation, suppressing the diff
    KeepState,
    /// A real change, or nothing safe to compare: keep the configured value
    UseConfig,
}

/// A pluggable plan-phase adjustment for one attribute
///
/// One modifier instance is attached to one attribute definition and
/// invoked once per plan evaluation for each resource instance. Instances
/// are shared across concurrent evaluations, hence `Send + Sync`.
#[async_trait]
pub trait AttributeModifier<T>: Send + Sync
where
    T: Clone + Send + Sync,
{
    /// Adjust the proposed plan for one attribute
    async fn plan(
        &self,
        state: &PlanValue<T>,
        config: &PlanValue<T>,
        proposed: &PlanValue<T>,
    ) -> PlanValue<T>;
}
