//! Collaborator interfaces consumed by the render pipeline
//!
//! The pipeline owns no configuration, routing, or credentials of its own;
//! the host injects these through the traits below. `UriTable` and
//! `StaticCredential` are plain implementations for hosts that keep the
//! registry and API key in configuration.

use std::collections::HashMap;

/// Closed set of known URI templates, owned by the host.
///
/// Membership is checked once at schema validation time; an unknown key is
/// a caller contract violation, not a runtime condition the pipeline
/// recovers from.
pub trait UriRegistry {
    /// Resolve a registry key to its path template.
    fn resolve(&self, key: &str) -> Option<&str>;
}

/// Receives deep-link navigation requests from anchor activation.
///
/// Requests are fire-and-forget: the method returns nothing, and failures
/// to update the host's location are neither observed nor retried.
pub trait Navigator {
    /// Set the current location's fragment to the given anchor id.
    fn set_fragment(&self, anchor_id: &str);
}

/// Side-channel supplier of the API key injected into example requests.
///
/// The key is not part of the endpoint schema itself.
pub trait CredentialSource {
    /// The API key to inject, if the host has one.
    fn api_key(&self) -> Option<&str>;
}

/// In-memory [`UriRegistry`] backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct UriTable {
    uris: HashMap<String, String>,
}

impl UriTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key/path pair, replacing any previous entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) {
        self.uris.insert(key.into(), path.into());
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl UriRegistry for UriTable {
    fn resolve(&self, key: &str) -> Option<&str> {
        self.uris.get(key).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for UriTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            uris: iter.into_iter().collect(),
        }
    }
}

/// Fixed credential value, for hosts that read the key from configuration.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    key: String,
}

impl StaticCredential {
    /// Wrap a literal API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<&str> {
        Some(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_table_resolve() {
        let mut table = UriTable::new();
        table.insert("link.create", "/api/link/create");
        assert_eq!(table.resolve("link.create"), Some("/api/link/create"));
        assert_eq!(table.resolve("link.delete"), None);
    }

    #[test]
    fn test_uri_table_insert_replaces() {
        let mut table = UriTable::new();
        table.insert("link.create", "/api/v1/link/create");
        table.insert("link.create", "/api/v2/link/create");
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("link.create"), Some("/api/v2/link/create"));
    }

    #[test]
    fn test_static_credential() {
        let credential = StaticCredential::new("abcdef");
        assert_eq!(credential.api_key(), Some("abcdef"));
    }
}
