// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Kind Registry
//!
//! Maps the resource-type tags carried by reference attributes onto the
//! NetBox API surface: which endpoint serves the kind, whether its entities
//! have a slug, and which query parameter filters by name. Adding a kind is
//! a single-row change here; lookup, equivalence, and the normalizers are
//! all table-driven off this registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource kinds whose references can be resolved to canonical IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    // Tenancy
    /// Tenant
    Tenant,
    /// Tenant group
    TenantGroup,

    // Sites and topology
    /// Site
    Site,
    /// Site group
    SiteGroup,
    /// Region
    Region,
    /// Location within a site
    Location,

    // Devices
    /// Device type (hardware model)
    DeviceType,
    /// Device role
    DeviceRole,
    /// Platform (OS/firmware)
    Platform,

    // Racks
    /// Rack
    Rack,
    /// Rack role
    RackRole,
    /// Rack type (hardware model)
    RackType,
}

/// Lookup metadata for one resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    /// Human-readable name used in diagnostics
    pub display: &'static str,
    /// API endpoint path relative to `/api/`
    pub endpoint: &'static str,
    /// Whether entities of this kind carry a slug
    pub has_slug: bool,
    /// Query parameter for the name-based filter (`model` for typed hardware)
    pub name_param: &'static str,
}

impl ResourceKind {
    /// Every kind the registry knows, in declaration order
    pub const ALL: [ResourceKind; 12] = [
        Self::Tenant,
        Self::TenantGroup,
        Self::Site,
        Self::SiteGroup,
        Self::Region,
        Self::Location,
        Self::DeviceType,
        Self::DeviceRole,
        Self::Platform,
        Self::Rack,
        Self::RackRole,
        Self::RackType,
    ];

    /// Get the canonical tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::TenantGroup => "tenant_group",
            Self::Site => "site",
            Self::SiteGroup => "site_group",
            Self::Region => "region",
            Self::Location => "location",
            Self::DeviceType => "device_type",
            Self::DeviceRole => "device_role",
            Self::Platform => "platform",
            Self::Rack => "rack",
            Self::RackRole => "rack_role",
            Self::RackType => "rack_type",
        }
    }

    /// Parse a resource-type tag
    ///
    /// Returns `None` for tags outside the registry. Callers treat that as
    /// "skip resolution for this attribute", never as an error, so a schema
    /// can attach reference modifiers to attributes whose kinds land in the
    /// registry later.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tenant" => Some(Self::Tenant),
            "tenant_group" => Some(Self::TenantGroup),
            "site" => Some(Self::Site),
            "site_group" => Some(Self::SiteGroup),
            "region" => Some(Self::Region),
            "location" => Some(Self::Location),
            "device_type" => Some(Self::DeviceType),
            "device_role" => Some(Self::DeviceRole),
            "platform" => Some(Self::Platform),
            "rack" => Some(Self::Rack),
            "rack_role" => Some(Self::RackRole),
            "rack_type" => Some(Self::RackType),
            _ => None,
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        self.descriptor().display
    }

    /// Get the API endpoint path for this kind, relative to `/api/`
    pub fn endpoint(&self) -> &'static str {
        self.descriptor().endpoint
    }

    /// Get the full lookup descriptor for this kind
    pub fn descriptor(&self) -> KindDescriptor {
        match self {
            Self::Tenant => KindDescriptor {
                display: "Tenant",
                endpoint: "tenancy/tenants",
                has_slug: true,
                name_param: "name",
            },
            Self::TenantGroup => KindDescriptor {
                display: "Tenant Group",
                endpoint: "tenancy/tenant-groups",
                has_slug: true,
                name_param: "name",
            },
            Self::Site => KindDescriptor {
                display: "Site",
                endpoint: "dcim/sites",
                has_slug: true,
                name_param: "name",
            },
            Self::SiteGroup => KindDescriptor {
                display: "Site Group",
                endpoint: "dcim/site-groups",
                has_slug: true,
                name_param: "name",
            },
            Self::Region => KindDescriptor {
                display: "Region",
                endpoint: "dcim/regions",
                has_slug: true,
                name_param: "name",
            },
            Self::Location => KindDescriptor {
                display: "Location",
                endpoint: "dcim/locations",
                has_slug: true,
                name_param: "name",
            },
            // Device and rack types are named by their hardware model string
            Self::DeviceType => KindDescriptor {
                display: "Device Type",
                endpoint: "dcim/device-types",
                has_slug: true,
                name_param: "model",
            },
            Self::DeviceRole => KindDescriptor {
                display: "Device Role",
                endpoint: "dcim/device-roles",
                has_slug: true,
                name_param: "name",
            },
            Self::Platform => KindDescriptor {
                display: "Platform",
                endpoint: "dcim/platforms",
                has_slug: true,
                name_param: "name",
            },
            // Racks have no slug; name is the only textual key
            Self::Rack => KindDescriptor {
                display: "Rack",
                endpoint: "dcim/racks",
                has_slug: false,
                name_param: "name",
            },
            Self::RackRole => KindDescriptor {
                display: "Rack Role",
                endpoint: "dcim/rack-roles",
                has_slug: true,
                name_param: "name",
            },
            Self::RackType => KindDescriptor {
                display: "Rack Type",
                endpoint: "dcim/rack-types",
                has_slug: true,
                name_param: "model",
            },
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
