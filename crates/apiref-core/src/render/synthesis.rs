//! Example payload synthesis from parameter metadata
//!
//! Synthesis is deterministic and order-preserving: descriptors contribute
//! fields in sequence order, and a later duplicate key silently overwrites
//! an earlier one while keeping the first insertion's position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::ParameterDescriptor;

/// Field name under which the host's credential is injected into example
/// requests.
pub const API_KEY_FIELD: &str = "api_key";

/// Policy deciding when a descriptor's example counts as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamplePolicy {
    /// An example is present when it is truthy. A legitimate `0`, `""`, or
    /// `false` example is indistinguishable from "no example" and is
    /// dropped from the payload. This matches the documented behavior of
    /// the format and is the default.
    #[default]
    Truthy,

    /// An example is present whenever the field was given, including `0`,
    /// `""`, and `false`.
    Explicit,
}

impl ExamplePolicy {
    /// Whether a supplied example value contributes to the payload.
    fn admits(self, example: &Value) -> bool {
        match self {
            ExamplePolicy::Explicit => !example.is_null(),
            ExamplePolicy::Truthy => match example {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
                Value::String(s) => !s.is_empty(),
                // Arrays and objects are always truthy, even when empty
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }
}

/// Build the example payload for an ordered descriptor sequence.
///
/// Descriptors whose example is present under `policy` contribute
/// `key: example`; the rest contribute nothing. An empty sequence yields an
/// empty mapping. Never fails.
pub fn synthesize(descriptors: &[ParameterDescriptor], policy: ExamplePolicy) -> Map<String, Value> {
    let mut payload = Map::new();
    for descriptor in descriptors {
        if let Some(example) = &descriptor.example {
            if policy.admits(example) {
                payload.insert(descriptor.key.clone(), example.clone());
            }
        }
    }
    payload
}

/// Build the example request payload.
///
/// The host's API key, when supplied, is injected ahead of the parameter
/// fields under [`API_KEY_FIELD`]; a parameter with that literal key
/// overwrites it, since last-write-wins applies uniformly.
pub fn synthesize_request(
    descriptors: &[ParameterDescriptor],
    api_key: Option<&str>,
    policy: ExamplePolicy,
) -> Map<String, Value> {
    let mut payload = Map::new();
    if let Some(key) = api_key {
        payload.insert(API_KEY_FIELD.to_string(), Value::String(key.to_string()));
    }
    payload.extend(synthesize(descriptors, policy));
    payload
}

/// Build the example response payload, wrapped in the fixed documentation
/// envelope `{"success": true, "message": null, ...fields}`.
///
/// The envelope shape is a contract of the documentation format and is not
/// configurable per endpoint. An empty descriptor sequence yields the bare
/// envelope.
pub fn synthesize_response(descriptors: &[ParameterDescriptor], policy: ExamplePolicy) -> Value {
    let mut envelope = Map::new();
    envelope.insert("success".to_string(), Value::Bool(true));
    envelope.insert("message".to_string(), Value::Null);
    envelope.extend(synthesize(descriptors, policy));
    Value::Object(envelope)
}
