//! Reference resolution and plan-diff suppression for NetBox-backed
//! declarative sync
//!
//! A configuration may point at a NetBox entity by canonical numeric ID,
//! by slug, or by name. This crate resolves those representations to
//! identities, suppresses plan diffs between representations of the same
//! entity, normalizes references, and merges partially-owned custom-field
//! collections.

pub mod client;
pub mod errors;
pub mod lookup;
pub mod plan;
pub mod refresh;
pub mod registry;
pub mod resolver;

// Re-export commonly used types
pub use client::{
    ClientError, EntitySummary, FilterField, InMemoryInventory, InventoryClient, NetBoxClient,
    NetBoxConfig,
};
pub use errors::{LookupError, LookupResult};
pub use lookup::{LookupEngine, Reference};
pub use plan::{
    merge_custom_fields, AttributeModifier, CustomField, CustomFieldsMerge, PlanDecision,
    PlanValue, PreferSlug, ReferenceEquivalence, ResolveToId,
};
pub use refresh::preserve_reference_format;
pub use registry::{KindDescriptor, ResourceKind};
pub use resolver::{ReferenceResolver, Resolution};
