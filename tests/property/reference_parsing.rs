// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Reference Parsing
//!
//! The parse boundary must be total and loss-free: every integer string is
//! an ID, every other non-empty string is a textual key carried verbatim,
//! and displaying a parsed reference parses back to itself.

use proptest::prelude::*;

use cim_netbox_sync::Reference;

proptest! {
    #[test]
    fn prop_integer_strings_parse_to_ids(id in any::<i64>()) {
        prop_assert_eq!(Reference::parse(&id.to_string()), Some(Reference::Id(id)));
    }

    #[test]
    fn prop_textual_keys_parse_to_themselves(key in "[a-zA-Z][a-zA-Z0-9 ._-]{0,24}") {
        prop_assert_eq!(
            Reference::parse(&key),
            Some(Reference::Key(key.clone()))
        );
    }

    #[test]
    fn prop_display_round_trips(id in any::<i64>()) {
        let reference = Reference::Id(id);
        prop_assert_eq!(Reference::parse(&reference.to_string()), Some(reference));
    }
}
