//! Shared helpers for command handlers

use crate::error::{Error, Result};
use apiref_core::EndpointSchema;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load an endpoint schema from a JSON or YAML file.
///
/// The file is parsed to a JSON value first so both formats go through the
/// same schema deserialization, rejecting unknown enum members either way.
pub fn load_schema(path: &Path) -> Result<EndpointSchema> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(file = %path.display(), "reading endpoint schema");
    let content = fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    let value: serde_json::Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|_e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|_e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })?
    };

    Ok(EndpointSchema::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_schema_from_json() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"{{
                "title": "Create Link",
                "subtitle": "Shorten a URL",
                "description": "Creates a new short link.",
                "authentication": "optional",
                "language": "bash",
                "method": "POST",
                "uri": "link.create"
            }}"#
        )
        .unwrap();

        let schema = load_schema(file.path()).unwrap();
        assert_eq!(schema.title, "Create Link");
    }

    #[test]
    fn test_load_schema_from_yaml() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        write!(
            file,
            "title: Create Link\n\
             subtitle: Shorten a URL\n\
             description: Creates a new short link.\n\
             authentication: optional\n\
             language: bash\n\
             method: POST\n\
             uri: link.create\n"
        )
        .unwrap();

        let schema = load_schema(file.path()).unwrap();
        assert_eq!(schema.uri, "link.create");
    }

    #[test]
    fn test_missing_file() {
        let err = load_schema(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_schema(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { ref expected, .. } if expected == "JSON"));
    }
}
