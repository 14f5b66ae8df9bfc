// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-netbox-sync
//!
//! Deterministic inventory seed data shared by the integration suites. All
//! entity IDs are fixed constants, and fixtures are the only place that
//! seeds entities; tests resolve against them, they never insert ad hoc.

use std::sync::Arc;

use cim_netbox_sync::{
    CustomField, EntitySummary, InMemoryInventory, ReferenceResolver, ResourceKind,
};

// Fixed entity IDs
pub const TENANT_PROD_ID: i64 = 7;
pub const TENANT_STAGING_ID: i64 = 12;
pub const SITE_EAST_ID: i64 = 15;
pub const DEVICE_TYPE_R640_ID: i64 = 9;
pub const PLATFORM_UBUNTU_ID: i64 = 21;
pub const RACK_R301_ID: i64 = 3;

/// Seed the canonical test inventory
pub fn seeded_inventory() -> Arc<InMemoryInventory> {
    let inventory = Arc::new(InMemoryInventory::new());
    inventory.insert(
        ResourceKind::Tenant,
        EntitySummary::new(
            TENANT_PROD_ID,
            "Production Environment",
            Some("production-environment"),
        ),
    );
    inventory.insert(
        ResourceKind::Tenant,
        EntitySummary::new(
            TENANT_STAGING_ID,
            "Staging Environment",
            Some("staging-environment"),
        ),
    );
    inventory.insert(
        ResourceKind::Site,
        EntitySummary::new(SITE_EAST_ID, "Datacenter East", Some("datacenter-east")),
    );
    inventory.insert(
        ResourceKind::DeviceType,
        EntitySummary::new(DEVICE_TYPE_R640_ID, "PowerEdge R640", Some("poweredge-r640")),
    );
    inventory.insert(
        ResourceKind::Platform,
        EntitySummary::new(PLATFORM_UBUNTU_ID, "Ubuntu 22.04 LTS", Some("ubuntu-2204")),
    );
    inventory.insert(
        ResourceKind::Rack,
        EntitySummary::new(RACK_R301_ID, "R-301", None),
    );
    inventory
}

/// Resolver over a fresh seeded inventory
pub fn seeded_resolver() -> ReferenceResolver {
    ReferenceResolver::new(seeded_inventory())
}

/// Shorthand for a text custom field
pub fn text_field(name: &str, value: &str) -> CustomField {
    CustomField::new(name, "text", value)
}
