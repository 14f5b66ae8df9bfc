// Copyright (c) 2025 - Cowboy AI, Inc.
//! Partial-Ownership Custom Field Merge
//!
//! A resource's custom-field collection is only partially owned by
//! configuration: entries the config names are managed, everything else on
//! the remote entity belongs to someone else and must survive a plan
//! untouched. The merge is keyed purely on field name; types and values
//! are carried through, never compared.
//!
//! Ownership rules:
//!
//! ```text
//! config null/unknown  →  plan untouched (collection unmanaged)
//! no prior state       →  config verbatim (create)
//! config == []         →  []              (authoritative clear)
//! otherwise            →  config ++ state entries absent from config
//! ```
//!
//! Also here: the typed encoding between the string-valued field models and
//! the API's `{name: value}` map, used when a managed collection is written
//! out or read back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::plan::{AttributeModifier, PlanValue};

/// One custom field entry as tracked in state and configuration
///
/// `value` is always the string form; `field_type` says how the API-side
/// value is typed (`text`, `integer`, `boolean`, `json`, `multiselect`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Field name, the merge key
    pub name: String,
    /// Field type tag
    #[serde(rename = "type")]
    pub field_type: String,
    /// String form of the value
    pub value: String,
}

impl CustomField {
    /// Convenience constructor
    pub fn new(
        name: impl Into<String>,
        field_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            value: value.into(),
        }
    }
}

/// Merge configured custom fields with externally-owned state entries
///
/// Pure; the modifier below is a thin shell over this. Config entries come
/// first in config order, surviving state entries follow in state order, so
/// the planned collection is deterministic.
pub fn merge_custom_fields(
    state: &PlanValue<Vec<CustomField>>,
    config: &PlanValue<Vec<CustomField>>,
    proposed: &PlanValue<Vec<CustomField>>,
) -> PlanValue<Vec<CustomField>> {
    // Unmanaged collection: whatever the engine proposed stands.
    let Some(config_fields) = config.as_value() else {
        return proposed.clone();
    };

    // Create: nothing external to preserve yet.
    let Some(state_fields) = state.as_value() else {
        return PlanValue::Value(config_fields.clone());
    };

    // An explicitly empty config clears the collection, external entries
    // included.
    if config_fields.is_empty() {
        return PlanValue::Value(Vec::new());
    }

    let managed: HashSet<&str> = config_fields.iter().map(|f| f.name.as_str()).collect();
    let mut merged = config_fields.clone();
    merged.extend(
        state_fields
            .iter()
            .filter(|f| !managed.contains(f.name.as_str()))
            .cloned(),
    );
    PlanValue::Value(merged)
}

/// Plan modifier preserving externally-owned custom fields
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomFieldsMerge;

#[async_trait]
impl AttributeModifier<Vec<CustomField>> for CustomFieldsMerge {
    async fn plan(
        &self,
        state: &PlanValue<Vec<CustomField>>,
        config: &PlanValue<Vec<CustomField>>,
        proposed: &PlanValue<Vec<CustomField>>,
    ) -> PlanValue<Vec<CustomField>> {
        merge_custom_fields(state, config, proposed)
    }
}

/// Encode a managed collection into the API's `{name: typed value}` map
///
/// An empty collection encodes as the empty map, which clears every remote
/// field. An empty value encodes as `null`, clearing that one field. Values
/// that fail to parse as their declared type are sent as strings; the API
/// owns the final validation.
pub fn to_api_map(fields: &[CustomField]) -> serde_json::Map<String, serde_json::Value> {
    let mut map = serde_json::Map::new();
    for field in fields {
        map.insert(field.name.clone(), typed_value(field));
    }
    map
}

fn typed_value(field: &CustomField) -> serde_json::Value {
    if field.value.is_empty() {
        return serde_json::Value::Null;
    }
    match field.field_type.as_str() {
        "integer" => match field.value.parse::<i64>() {
            Ok(n) => serde_json::Value::from(n),
            Err(_) => serde_json::Value::String(field.value.clone()),
        },
        "boolean" => match field.value.parse::<bool>() {
            Ok(b) => serde_json::Value::Bool(b),
            Err(_) => serde_json::Value::String(field.value.clone()),
        },
        "json" => match serde_json::from_str(&field.value) {
            Ok(v) => v,
            Err(_) => serde_json::Value::String(field.value.clone()),
        },
        "multiselect" | "multiple" => serde_json::Value::Array(
            field
                .value
                .split(',')
                .map(|part| serde_json::Value::String(part.trim().to_string()))
                .collect(),
        ),
        _ => serde_json::Value::String(field.value.clone()),
    }
}

/// Restore a managed collection from an API map
///
/// Only entries the prior state knows come back; the state supplies name
/// and type, the map supplies the value. Fields the map no longer carries
/// come back with an empty value. External fields in the map are ignored,
/// which is the read-side half of partial ownership.
pub fn restore_from_api(
    api: &serde_json::Map<String, serde_json::Value>,
    state: &[CustomField],
) -> Vec<CustomField> {
    state
        .iter()
        .map(|field| {
            let value = match api.get(&field.name) {
                None | Some(serde_json::Value::Null) => String::new(),
                Some(value) => stringify(field.field_type.as_str(), value),
            };
            CustomField::new(&field.name, &field.field_type, value)
        })
        .collect()
}

fn stringify(field_type: &str, value: &serde_json::Value) -> String {
    match (field_type, value) {
        ("multiselect" | "multiple", serde_json::Value::Array(items)) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(","),
        ("json", value) => value.to_string(),
        (_, value) => scalar_to_string(value),
    }
}

fn scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn field(name: &str, value: &str) -> CustomField {
        CustomField::new(name, "text", value)
    }

    #[test]
    fn test_merge_preserves_external_fields() {
        let state = PlanValue::Value(vec![
            field("owner", "ops-team"),
            field("environment", "prod"),
        ]);
        let config = PlanValue::Value(vec![field("environment", "staging")]);

        let merged = merge_custom_fields(&state, &config, &config);

        assert_eq!(
            merged,
            PlanValue::Value(vec![
                field("environment", "staging"),
                field("owner", "ops-team"),
            ])
        );
    }

    #[test]
    fn test_empty_config_clears_everything() {
        let state = PlanValue::Value(vec![field("owner", "ops-team")]);
        let config: PlanValue<Vec<CustomField>> = PlanValue::Value(Vec::new());

        let merged = merge_custom_fields(&state, &config, &config);

        assert_eq!(merged, PlanValue::Value(Vec::new()));
    }

    #[test]
    fn test_null_config_leaves_plan_untouched() {
        let state = PlanValue::Value(vec![field("owner", "ops-team")]);

        let untouched = merge_custom_fields(&state, &PlanValue::Null, &PlanValue::Null);
        assert_eq!(untouched, PlanValue::Null);

        let unknown = merge_custom_fields(&state, &PlanValue::Unknown, &PlanValue::Unknown);
        assert_eq!(unknown, PlanValue::Unknown);
    }

    #[test]
    fn test_create_takes_config_verbatim() {
        let config = PlanValue::Value(vec![field("environment", "staging")]);

        let merged = merge_custom_fields(&PlanValue::Null, &config, &config);

        assert_eq!(merged, config);
    }

    #[tokio::test]
    async fn test_modifier_delegates_to_merge() {
        let state = PlanValue::Value(vec![field("owner", "ops-team")]);
        let config = PlanValue::Value(vec![field("environment", "staging")]);

        let planned = CustomFieldsMerge.plan(&state, &config, &config).await;

        assert_eq!(
            planned,
            PlanValue::Value(vec![
                field("environment", "staging"),
                field("owner", "ops-team"),
            ])
        );
    }

    #[test]
    fn test_to_api_map_types_values() {
        let fields = vec![
            CustomField::new("environment", "text", "staging"),
            CustomField::new("rack_units", "integer", "42"),
            CustomField::new("monitored", "boolean", "true"),
            CustomField::new("metadata", "json", r#"{"team":"ops"}"#),
            CustomField::new("zones", "multiselect", "east, west"),
            CustomField::new("decommissioned", "text", ""),
        ];

        let map = to_api_map(&fields);

        assert_eq!(map["environment"], json!("staging"));
        assert_eq!(map["rack_units"], json!(42));
        assert_eq!(map["monitored"], json!(true));
        assert_eq!(map["metadata"], json!({"team": "ops"}));
        assert_eq!(map["zones"], json!(["east", "west"]));
        assert_eq!(map["decommissioned"], json!(null));
    }

    #[test]
    fn test_to_api_map_falls_back_to_strings_on_bad_input() {
        let fields = vec![
            CustomField::new("rack_units", "integer", "forty-two"),
            CustomField::new("monitored", "boolean", "yes"),
            CustomField::new("metadata", "json", "{not json"),
        ];

        let map = to_api_map(&fields);

        assert_eq!(map["rack_units"], json!("forty-two"));
        assert_eq!(map["monitored"], json!("yes"));
        assert_eq!(map["metadata"], json!("{not json"));
    }

    #[test]
    fn test_empty_collection_encodes_as_empty_map() {
        assert!(to_api_map(&[]).is_empty());
    }

    #[test]
    fn test_restore_round_trips_only_managed_fields() {
        let state = vec![
            CustomField::new("environment", "text", "staging"),
            CustomField::new("rack_units", "integer", "42"),
            CustomField::new("zones", "multiselect", "east,west"),
            CustomField::new("metadata", "json", r#"{"team":"ops"}"#),
            CustomField::new("retired", "text", "old"),
        ];
        let api = serde_json::from_value::<serde_json::Map<_, _>>(json!({
            "environment": "production",
            "rack_units": 48,
            "zones": ["north", "south"],
            "metadata": {"team": "net"},
            "external_audit": "do-not-touch"
        }))
        .unwrap();

        let restored = restore_from_api(&api, &state);

        assert_eq!(
            restored,
            vec![
                CustomField::new("environment", "text", "production"),
                CustomField::new("rack_units", "integer", "48"),
                CustomField::new("zones", "multiselect", "north,south"),
                CustomField::new("metadata", "json", r#"{"team":"net"}"#),
                // Dropped remotely, so the value empties out
                CustomField::new("retired", "text", ""),
            ]
        );
        assert!(!restored.iter().any(|f| f.name == "external_audit"));
    }
}
