// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Client Abstraction
//!
//! The lookup path talks to NetBox through this narrow seam: fetch one
//! entity by canonical ID, or list the entities matching a filter field.
//! Production injects the HTTP client; tests and offline runs inject the
//! in-memory one. Implementations are always passed in
//! (`Arc<dyn InventoryClient>`), never reached through globals, so every
//! caller can be exercised without a server.

mod http;
mod memory;

pub use http::{NetBoxClient, NetBoxConfig};
pub use memory::InMemoryInventory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::ResourceKind;

/// Errors surfaced by inventory client implementations
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// The client itself could not be constructed
    #[error("Client configuration error: {0}")]
    Config(String),
}

/// Brief form of a remote entity
///
/// Carries exactly what identity comparison and reference rewriting need.
/// Hardware kinds (device/rack types) report their model string as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    /// Canonical numeric ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// URL slug, absent for kinds without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl EntitySummary {
    /// Convenience constructor for seeds and fixtures
    pub fn new(id: i64, name: impl Into<String>, slug: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.map(|s| s.to_string()),
        }
    }
}

/// Which field a list lookup filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// The kind's slug field (exact match)
    Slug,
    /// The kind's name parameter (exact match; `model` for typed hardware)
    Name,
}

/// Read-only access to the remote inventory
///
/// One method per lookup shape the resolution path needs. Implementations
/// are shared across attributes during a plan (`Send + Sync`) and must not
/// cache between calls.
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Fetch a single entity by canonical ID
    ///
    /// `Ok(None)` means the ID does not exist. Transport and protocol
    /// failures are errors, never `None`.
    async fn get_by_id(
        &self,
        kind: ResourceKind,
        id: i64,
    ) -> Result<Option<EntitySummary>, ClientError>;

    /// List entities whose `field` exactly matches `value`
    ///
    /// Returns every match; the caller decides what zero or many means.
    async fn list_by_field(
        &self,
        kind: ResourceKind,
        field: FilterField,
        value: &str,
    ) -> Result<Vec<EntitySummary>, ClientError>;
}
