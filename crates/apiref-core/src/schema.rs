//! Endpoint schema model
//!
//! The immutable input to the render pipeline: endpoint metadata plus
//! ordered parameter, response, and error descriptors. Enum fields are
//! closed sets enforced by serde deserialization; the remaining boundary
//! rules live in [`EndpointSchema::validate`], which is expected to run
//! once at construction time so the pipeline can assume validity.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::traits::UriRegistry;

/// Declarative description of one API operation.
///
/// Immutable for the lifetime of one render. Deserialize it from JSON or
/// construct it directly, then run [`EndpointSchema::validate`] against the
/// host's URI registry before handing it to [`crate::render`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSchema {
    /// Display heading; also the anchor seed
    pub title: String,

    /// Secondary heading shown under the title
    pub subtitle: String,

    /// Prose description of the operation
    pub description: String,

    /// Authentication requirement for the operation
    pub authentication: Authentication,

    /// Code-sample language tag, opaque to the pipeline
    pub language: String,

    /// HTTP method
    pub method: Method,

    /// Key into the externally supplied URI registry
    pub uri: String,

    /// Request parameters, in display order
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,

    /// Response fields, in display order (`required` carries no meaning here)
    #[serde(default)]
    pub response: Vec<ParameterDescriptor>,

    /// Failure modes of the operation
    #[serde(default)]
    pub errors: Vec<ErrorDescriptor>,
}

impl EndpointSchema {
    /// Deserialize a schema from a JSON value.
    ///
    /// Unknown `method` or `authentication` strings are rejected here,
    /// since both enums are closed sets.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Fail-fast boundary validation.
    ///
    /// Runs once at construction time, before the schema reaches the render
    /// pipeline. The pipeline itself re-checks nothing beyond the
    /// example-presence test during synthesis.
    pub fn validate(&self, registry: &dyn UriRegistry) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::schema_violation("title", "title must be non-empty"));
        }
        if registry.resolve(&self.uri).is_none() {
            return Err(Error::UnknownUri {
                key: self.uri.clone(),
            });
        }
        Ok(())
    }
}

/// Authentication requirement for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Authentication {
    Required,
    Optional,
    None,
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case display form, identical to the wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request parameter or response field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Field name; assumed unique within its owning sequence. Duplicates
    /// are not rejected, and a later duplicate silently overwrites an
    /// earlier one during example synthesis.
    pub key: String,

    /// Display-only type label, never checked against `example`'s runtime type
    #[serde(rename = "type")]
    pub type_name: String,

    /// Prose description of the field
    pub description: String,

    /// Example value (string, number, or object); omitted from the
    /// synthesized payload when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Whether the parameter is mandatory; meaningful only for request
    /// parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// One failure mode of an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Error code returned by the operation
    pub failure: String,

    /// Prose description of the failure
    pub description: String,
}
