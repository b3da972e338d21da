//! Error types for the apiref core library
//!
//! All failure modes here are caller contract violations caught at the
//! system boundary; the render pipeline itself has no recoverable runtime
//! errors. Synthesis of falsy examples is a documented silent policy, not
//! an error, and navigation requests are fire-and-forget.

use thiserror::Error;

/// Main error type for apiref core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing or malformed at schema construction time
    #[error("Schema violation at '{path}': {message}")]
    SchemaViolation { path: String, message: String },

    /// A URI key that is not a member of the injected registry
    #[error("Unknown URI key '{key}': not present in the registry")]
    UnknownUri { key: String },

    /// JSON serialization errors surfaced from serde_json
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a schema violation for a field path
    pub fn schema_violation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
