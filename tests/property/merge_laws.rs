// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Custom Field Merge
//!
//! The merge's ownership laws must hold for every state/config pair:
//! config entries always lead the result unchanged, everything after them
//! comes from state and never collides with a managed name, an empty
//! config always clears, and an unmanaged (null or unknown) config never
//! touches the plan.

use proptest::prelude::*;
use std::collections::HashSet;

use cim_netbox_sync::{merge_custom_fields, CustomField, PlanValue};

/// Field names drawn from a small alphabet so state/config collisions
/// actually happen
fn field_name() -> impl Strategy<Value = String> {
    "[a-d][a-z]{0,3}"
}

fn custom_field() -> impl Strategy<Value = CustomField> {
    (field_name(), "[a-z0-9 ]{0,8}")
        .prop_map(|(name, value)| CustomField::new(name, "text", value))
}

/// A collection with unique names, as the attribute schema guarantees
fn field_collection(max: usize) -> impl Strategy<Value = Vec<CustomField>> {
    prop::collection::vec(custom_field(), 0..max).prop_map(|fields| {
        let mut seen = HashSet::new();
        fields
            .into_iter()
            .filter(|field| seen.insert(field.name.clone()))
            .collect()
    })
}

/// Any three-state collection value
fn plan_collection() -> impl Strategy<Value = PlanValue<Vec<CustomField>>> {
    prop_oneof![
        Just(PlanValue::Null),
        Just(PlanValue::Unknown),
        field_collection(6).prop_map(PlanValue::Value),
    ]
}

fn merge(
    state: &PlanValue<Vec<CustomField>>,
    config: &PlanValue<Vec<CustomField>>,
) -> PlanValue<Vec<CustomField>> {
    merge_custom_fields(state, config, config)
}

proptest! {
    #[test]
    fn prop_config_entries_lead_the_merge_unchanged(
        state in field_collection(6),
        config in field_collection(6),
    ) {
        prop_assume!(!config.is_empty());
        let merged = merge(&PlanValue::Value(state), &PlanValue::Value(config.clone()))
            .into_value()
            .unwrap();
        prop_assert_eq!(&merged[..config.len()], &config[..]);
    }

    #[test]
    fn prop_extras_come_from_state_without_managed_names(
        state in field_collection(6),
        config in field_collection(6),
    ) {
        prop_assume!(!config.is_empty());
        let managed: HashSet<String> = config.iter().map(|f| f.name.clone()).collect();
        let merged = merge(
            &PlanValue::Value(state.clone()),
            &PlanValue::Value(config.clone()),
        )
        .into_value()
        .unwrap();

        for extra in &merged[config.len()..] {
            prop_assert!(!managed.contains(&extra.name));
            prop_assert!(state.contains(extra));
        }
    }

    #[test]
    fn prop_merge_is_idempotent(
        state in plan_collection(),
        config in field_collection(6),
    ) {
        let config = PlanValue::Value(config);
        let once = merge(&state, &config);
        let twice = merge(&once, &config);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_empty_config_always_clears(state in plan_collection()) {
        let merged = merge(&state, &PlanValue::Value(Vec::new()));
        prop_assert_eq!(merged, PlanValue::Value(Vec::new()));
    }

    #[test]
    fn prop_unmanaged_config_never_touches_the_plan(
        state in plan_collection(),
        proposed in plan_collection(),
    ) {
        prop_assert_eq!(
            merge_custom_fields(&state, &PlanValue::Null, &proposed),
            proposed.clone()
        );
        prop_assert_eq!(
            merge_custom_fields(&state, &PlanValue::Unknown, &proposed),
            proposed
        );
    }

    #[test]
    fn prop_create_takes_config_verbatim(config in field_collection(6)) {
        let config = PlanValue::Value(config);
        prop_assert_eq!(merge(&PlanValue::Null, &config), config);
    }
}
