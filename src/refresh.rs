// Copyright (c) 2025 - Cowboy AI, Inc.
//! Post-Read Representation Preservation
//!
//! After a refresh reads an entity back from the API, the recorded
//! reference should stay in whatever representation the user wrote, as
//! long as it still denotes that entity. Only a numeric reference pointing
//! at a different ID is real drift and gets replaced; a stale textual key
//! is kept and revalidated by the next lookup.

use tracing::debug;

use crate::client::EntitySummary;
use crate::plan::PlanValue;

/// Reconcile a recorded reference with the entity the API returned
pub fn preserve_reference_format(
    current: &PlanValue<String>,
    entity: &EntitySummary,
) -> PlanValue<String> {
    let current_value = match current {
        // Unmanaged stays unmanaged
        PlanValue::Null => return PlanValue::Null,
        // Deferred values settle to the canonical ID
        PlanValue::Unknown => return PlanValue::Value(entity.id.to_string()),
        PlanValue::Value(v) => v,
    };

    let slug = entity.slug.as_deref().filter(|s| !s.is_empty());
    let id_string = entity.id.to_string();

    let exact = *current_value == id_string
        || *current_value == entity.name
        || slug.is_some_and(|s| current_value == s);
    // Case differences are representation, not drift; keep the user's casing
    let folded = current_value.to_lowercase() == entity.name.to_lowercase()
        || slug.is_some_and(|s| current_value.to_lowercase() == s.to_lowercase());

    if exact || folded {
        return current.clone();
    }

    if current_value.parse::<i64>().is_err() {
        // A stale textual key is kept; the next resolution validates it
        return current.clone();
    }

    debug!(
        "Reference drifted from '{}' to ID {}; recording the remote ID",
        current_value, entity.id
    );
    PlanValue::Value(id_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> EntitySummary {
        EntitySummary::new(7, "Production Environment", Some("production-environment"))
    }

    #[test]
    fn test_null_and_unknown() {
        assert_eq!(
            preserve_reference_format(&PlanValue::Null, &tenant()),
            PlanValue::Null
        );
        assert_eq!(
            preserve_reference_format(&PlanValue::Unknown, &tenant()),
            PlanValue::from("7")
        );
    }

    #[test]
    fn test_matching_representations_are_kept() {
        for current in ["7", "production-environment", "Production Environment"] {
            assert_eq!(
                preserve_reference_format(&PlanValue::from(current), &tenant()),
                PlanValue::from(current),
                "representation {current:?}"
            );
        }
    }

    #[test]
    fn test_case_insensitive_match_keeps_user_casing() {
        let current = PlanValue::from("PRODUCTION-ENVIRONMENT");
        assert_eq!(preserve_reference_format(&current, &tenant()), current);

        let name_cased = PlanValue::from("production environment");
        assert_eq!(preserve_reference_format(&name_cased, &tenant()), name_cased);
    }

    #[test]
    fn test_numeric_drift_records_remote_id() {
        assert_eq!(
            preserve_reference_format(&PlanValue::from("12"), &tenant()),
            PlanValue::from("7")
        );
    }

    #[test]
    fn test_stale_textual_key_is_kept() {
        let stale = PlanValue::from("old-tenant-slug");
        assert_eq!(preserve_reference_format(&stale, &tenant()), stale);
    }

    #[test]
    fn test_empty_slug_is_ignored() {
        let rack = EntitySummary::new(3, "R-301", Some(""));
        assert_eq!(
            preserve_reference_format(&PlanValue::from("R-301"), &rack),
            PlanValue::from("R-301")
        );
        assert_eq!(
            preserve_reference_format(&PlanValue::from("12"), &rack),
            PlanValue::from("3")
        );
    }
}
