//! Property-based tests for anchor computation and example synthesis
//!
//! These verify the algebraic invariants that should hold for all inputs:
//! anchor ids are idempotent and whitespace-free, and synthesis is a
//! last-write-wins projection of the descriptor sequence.

use apiref_core::{anchor_id, synthesize, ExamplePolicy, ParameterDescriptor};
use proptest::prelude::*;
use serde_json::Value;

// Strategy functions for property testing

/// Strategy for heading-like text: words, whitespace runs, mixed case
fn heading_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 \t]{0,40}"
}

/// Strategy for descriptor keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

/// Strategy for example values of the shapes the schema allows
fn example_strategy() -> impl Strategy<Value = Option<Value>> {
    proptest::option::of(prop_oneof![
        "[a-zA-Z0-9]{0,20}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        Just(Value::Bool(true)),
        Just(Value::Bool(false)),
    ])
}

fn descriptor_strategy() -> impl Strategy<Value = ParameterDescriptor> {
    (key_strategy(), example_strategy()).prop_map(|(key, example)| ParameterDescriptor {
        key,
        type_name: "string".to_string(),
        description: String::new(),
        example,
        required: None,
    })
}

proptest! {
    #[test]
    fn anchor_id_is_idempotent(text in heading_strategy()) {
        let once = anchor_id(&text);
        prop_assert_eq!(anchor_id(&once), once);
    }

    #[test]
    fn anchor_id_is_case_invariant(text in heading_strategy()) {
        prop_assert_eq!(anchor_id(&text.to_uppercase()), anchor_id(&text.to_lowercase()));
    }

    #[test]
    fn anchor_id_contains_no_whitespace(text in heading_strategy()) {
        let id = anchor_id(&text);
        prop_assert!(!id.chars().any(char::is_whitespace));
        prop_assert!(!id.contains("--"));
        prop_assert!(!id.starts_with('-') && !id.ends_with('-'));
    }

    #[test]
    fn synthesis_keys_come_from_descriptors(
        descriptors in proptest::collection::vec(descriptor_strategy(), 0..8)
    ) {
        let payload = synthesize(&descriptors, ExamplePolicy::Truthy);
        for key in payload.keys() {
            prop_assert!(descriptors.iter().any(|d| &d.key == key));
        }
    }

    #[test]
    fn explicit_policy_keeps_every_given_example(
        descriptors in proptest::collection::vec(descriptor_strategy(), 0..8)
    ) {
        let payload = synthesize(&descriptors, ExamplePolicy::Explicit);
        // Distinct keys that carry an example all survive the explicit policy
        for descriptor in &descriptors {
            if descriptor.example.is_some() {
                prop_assert!(payload.contains_key(&descriptor.key));
            }
        }
    }

    #[test]
    fn duplicate_keys_resolve_to_last_descriptor(
        key in key_strategy(),
        first in "[a-z]{1,10}",
        last in "[a-z]{1,10}",
    ) {
        let descriptors = vec![
            ParameterDescriptor {
                key: key.clone(),
                type_name: "string".to_string(),
                description: String::new(),
                example: Some(Value::from(first)),
                required: None,
            },
            ParameterDescriptor {
                key: key.clone(),
                type_name: "string".to_string(),
                description: String::new(),
                example: Some(Value::from(last.clone())),
                required: None,
            },
        ];
        let payload = synthesize(&descriptors, ExamplePolicy::Explicit);
        prop_assert_eq!(&payload[&key], &Value::from(last));
    }

    #[test]
    fn truthy_payload_is_subset_of_explicit(
        descriptors in proptest::collection::vec(descriptor_strategy(), 0..8)
    ) {
        let truthy = synthesize(&descriptors, ExamplePolicy::Truthy);
        let explicit = synthesize(&descriptors, ExamplePolicy::Explicit);
        for key in truthy.keys() {
            prop_assert!(explicit.contains_key(key));
        }
    }
}
