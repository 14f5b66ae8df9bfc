// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Inventory
//!
//! A seedable [`InventoryClient`] for tests and offline runs. Lookup
//! semantics mirror the real API: exact matches only, and a missing ID is
//! `None`, not an error. Call counters let tests assert that numeric
//! references resolve without touching the client at all.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ClientError, EntitySummary, FilterField, InventoryClient};
use crate::registry::ResourceKind;

/// In-process inventory with per-method call counters
#[derive(Default)]
pub struct InMemoryInventory {
    entities: Mutex<HashMap<ResourceKind, Vec<EntitySummary>>>,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl InMemoryInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entity under a kind
    pub fn insert(&self, kind: ResourceKind, entity: EntitySummary) {
        self.entities
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(entity);
    }

    /// Number of `get_by_id` calls made so far
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Number of `list_by_field` calls made so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Total client calls made so far
    pub fn total_calls(&self) -> usize {
        self.get_calls() + self.list_calls()
    }
}

#[async_trait]
impl InventoryClient for InMemoryInventory {
    async fn get_by_id(
        &self,
        kind: ResourceKind,
        id: i64,
    ) -> Result<Option<EntitySummary>, ClientError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let entities = self.entities.lock().unwrap();
        Ok(entities
            .get(&kind)
            .and_then(|list| list.iter().find(|e| e.id == id))
            .cloned())
    }

    async fn list_by_field(
        &self,
        kind: ResourceKind,
        field: FilterField,
        value: &str,
    ) -> Result<Vec<EntitySummary>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let entities = self.entities.lock().unwrap();
        let matches = entities
            .get(&kind)
            .map(|list| {
                list.iter()
                    .filter(|e| match field {
                        FilterField::Slug => e.slug.as_deref() == Some(value),
                        FilterField::Name => e.name == value,
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }
}
