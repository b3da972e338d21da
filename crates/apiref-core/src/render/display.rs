//! Display adaptation: labels, table headers, and row construction
//!
//! Pure lookups from schema fields to the display values consumed by the
//! host's tabular renderer. The enums involved are closed sets, so every
//! mapping here is total.

use serde::Serialize;

use crate::schema::{Authentication, ErrorDescriptor, Method, ParameterDescriptor};

/// Header row for the request parameter table.
pub const PARAMETER_HEADER: &[&str] = &["KEY", "TYPE", "REQUIRED", "DESCRIPTION"];

/// Header row for the response field table.
pub const RESPONSE_HEADER: &[&str] = &["KEY", "TYPE", "DESCRIPTION"];

/// Header row for the error table.
pub const ERROR_HEADER: &[&str] = &["FAILURE CODE", "DESCRIPTION"];

/// Header plus rows handed to the host's tabular renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub header: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// Fixed display label for an authentication mode.
pub fn authentication_label(authentication: Authentication) -> &'static str {
    match authentication {
        Authentication::Required => "AUTHENTICATION REQUIRED",
        Authentication::Optional => "AUTHENTICATION OPTIONAL",
        Authentication::None => "AUTHENTICATION NOT REQUIRED",
    }
}

/// Display line for the HTTP endpoint section: method plus full address.
pub fn http_endpoint(method: Method, base_url: &str, path: &str) -> String {
    format!("{} {}{}", method, base_url, path)
}

/// Table of request parameters, with `required` mapped to Yes/No.
pub fn parameter_table(parameters: &[ParameterDescriptor]) -> TableSpec {
    TableSpec {
        header: PARAMETER_HEADER,
        rows: parameters
            .iter()
            .map(|parameter| {
                // Absent counts as not required
                let required = if parameter.required == Some(true) { "Yes" } else { "No" };
                vec![
                    parameter.key.clone(),
                    parameter.type_name.clone(),
                    required.to_string(),
                    parameter.description.clone(),
                ]
            })
            .collect(),
    }
}

/// Table of response fields.
pub fn response_table(fields: &[ParameterDescriptor]) -> TableSpec {
    TableSpec {
        header: RESPONSE_HEADER,
        rows: fields
            .iter()
            .map(|field| {
                vec![
                    field.key.clone(),
                    field.type_name.clone(),
                    field.description.clone(),
                ]
            })
            .collect(),
    }
}

/// Table of failure modes.
pub fn error_table(errors: &[ErrorDescriptor]) -> TableSpec {
    TableSpec {
        header: ERROR_HEADER,
        rows: errors
            .iter()
            .map(|error| vec![error.failure.clone(), error.description.clone()])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter(key: &str, required: Option<bool>) -> ParameterDescriptor {
        ParameterDescriptor {
            key: key.to_string(),
            type_name: "string".to_string(),
            description: format!("{} field", key),
            example: None,
            required,
        }
    }

    #[test]
    fn test_authentication_labels() {
        assert_eq!(
            authentication_label(Authentication::Required),
            "AUTHENTICATION REQUIRED"
        );
        assert_eq!(
            authentication_label(Authentication::Optional),
            "AUTHENTICATION OPTIONAL"
        );
        assert_eq!(
            authentication_label(Authentication::None),
            "AUTHENTICATION NOT REQUIRED"
        );
    }

    #[test]
    fn test_http_endpoint_line() {
        assert_eq!(
            http_endpoint(Method::Post, "https://api.example.com", "/api/link/create"),
            "POST https://api.example.com/api/link/create"
        );
    }

    #[test]
    fn test_parameter_table_required_column() {
        let table = parameter_table(&[
            parameter("url", Some(true)),
            parameter("title", Some(false)),
            parameter("note", None),
        ]);
        assert_eq!(table.header, PARAMETER_HEADER);
        assert_eq!(table.rows[0][2], "Yes");
        assert_eq!(table.rows[1][2], "No");
        // Absent means not required
        assert_eq!(table.rows[2][2], "No");
    }

    #[test]
    fn test_response_table_has_no_required_column() {
        let table = response_table(&[parameter("id", None)]);
        assert_eq!(table.header, RESPONSE_HEADER);
        assert_eq!(table.rows[0], vec!["id", "string", "id field"]);
    }

    #[test]
    fn test_error_table_rows() {
        let table = error_table(&[ErrorDescriptor {
            failure: "failure_incomplete_params".to_string(),
            description: "A required parameter is missing.".to_string(),
        }]);
        assert_eq!(table.header, ERROR_HEADER);
        assert_eq!(
            table.rows[0],
            vec!["failure_incomplete_params", "A required parameter is missing."]
        );
    }

    #[test]
    fn test_empty_sequences_yield_empty_rows() {
        assert!(parameter_table(&[]).rows.is_empty());
        assert!(response_table(&[]).rows.is_empty());
        assert!(error_table(&[]).rows.is_empty());
    }
}
