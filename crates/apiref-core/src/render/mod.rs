//! Render pipeline: endpoint schema to render-ready artifacts
//!
//! [`render`] is the single entry point. It takes a validated schema plus
//! the host's collaborators and produces one [`RenderedEndpoint`]: the
//! synthesized request and response examples (both as structured values and
//! as pretty-printed text for the code-block renderer), the three table
//! specifications, the display labels, and a fresh anchor controller.
//!
//! Everything here is synchronous and pure apart from the URI lookup; the
//! only mutable state in the whole pipeline is the visibility flag inside
//! the returned controller.

pub mod anchor;
pub mod display;
pub mod synthesis;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::{EndpointSchema, Method};
use crate::traits::{CredentialSource, UriRegistry};

pub use anchor::{anchor_id, AnchorController, AnchorVisibility};
pub use display::TableSpec;
pub use synthesis::ExamplePolicy;

/// Collaborators injected into [`render`].
///
/// Replaces ambient configuration lookup: the registry and base URL are
/// passed explicitly by the host.
pub struct RenderContext<'a> {
    /// Closed set of known URI templates
    pub registry: &'a dyn UriRegistry,
    /// Base URL composed with the resolved path for display
    pub base_url: &'a str,
    /// Optional supplier of the API key injected into example requests
    pub credentials: Option<&'a dyn CredentialSource>,
    /// Example-presence policy for synthesis
    pub policy: ExamplePolicy,
}

impl<'a> RenderContext<'a> {
    /// Context with no credentials and the default policy.
    pub fn new(registry: &'a dyn UriRegistry, base_url: &'a str) -> Self {
        Self {
            registry,
            base_url,
            credentials: None,
            policy: ExamplePolicy::default(),
        }
    }

    /// Attach a credential source.
    pub fn with_credentials(mut self, credentials: &'a dyn CredentialSource) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Select the example-presence policy.
    pub fn with_policy(mut self, policy: ExamplePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Synthesized example request, ready for the code-block renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RequestExample {
    /// Code-sample language tag, passed through from the schema
    pub language: String,
    /// HTTP method of the request
    pub method: Method,
    /// Full request address: base URL plus resolved path
    pub url: String,
    /// Synthesized request payload
    pub body: Value,
    /// Payload pretty-printed with two-space indentation
    pub body_text: String,
}

/// Render-ready artifact bundle for one endpoint.
#[derive(Debug, Serialize)]
pub struct RenderedEndpoint {
    /// Display heading
    pub title: String,
    /// Secondary heading
    pub subtitle: String,
    /// Prose description
    pub description: String,
    /// Anchor identifier derived from the title
    pub anchor: String,
    /// Fixed authentication label
    pub authentication_label: &'static str,
    /// Display line for the HTTP endpoint section
    pub http_endpoint: String,
    /// Example request for the code-block renderer
    pub request: RequestExample,
    /// Example response payload, envelope included
    pub response_body: Value,
    /// Response payload pretty-printed with two-space indentation
    pub response_text: String,
    /// Parameter listing for the tabular renderer
    pub parameter_table: TableSpec,
    /// Response field listing for the tabular renderer
    pub response_table: TableSpec,
    /// Error listing for the tabular renderer
    pub error_table: TableSpec,
    /// Hover state for the heading's anchor glyph, freshly reset
    #[serde(skip)]
    pub anchor_controller: AnchorController,
}

/// Render one endpoint schema into its artifact bundle.
///
/// The schema is assumed to have passed [`EndpointSchema::validate`]; the
/// only boundary condition re-checked here is the URI lookup, because it
/// cannot be performed without the registry.
///
/// # Errors
///
/// Returns [`Error::UnknownUri`] when the schema's URI key is not a member
/// of the injected registry.
pub fn render(schema: &EndpointSchema, ctx: &RenderContext<'_>) -> Result<RenderedEndpoint> {
    let path = ctx
        .registry
        .resolve(&schema.uri)
        .ok_or_else(|| Error::UnknownUri {
            key: schema.uri.clone(),
        })?;
    debug!(uri = %schema.uri, path, "resolved endpoint path");

    let api_key = ctx.credentials.and_then(|source| source.api_key());
    let body = Value::Object(synthesis::synthesize_request(
        &schema.parameters,
        api_key,
        ctx.policy,
    ));
    let body_text = serde_json::to_string_pretty(&body)?;

    let response_body = synthesis::synthesize_response(&schema.response, ctx.policy);
    let response_text = serde_json::to_string_pretty(&response_body)?;

    let url = format!("{}{}", ctx.base_url, path);
    debug!(
        method = %schema.method,
        url = %url,
        parameters = schema.parameters.len(),
        "rendering endpoint"
    );

    Ok(RenderedEndpoint {
        title: schema.title.clone(),
        subtitle: schema.subtitle.clone(),
        description: schema.description.clone(),
        anchor: anchor::anchor_id(&schema.title),
        authentication_label: display::authentication_label(schema.authentication),
        http_endpoint: display::http_endpoint(schema.method, ctx.base_url, path),
        request: RequestExample {
            language: schema.language.clone(),
            method: schema.method,
            url,
            body,
            body_text,
        },
        response_body,
        response_text,
        parameter_table: display::parameter_table(&schema.parameters),
        response_table: display::response_table(&schema.response),
        error_table: display::error_table(&schema.errors),
        anchor_controller: AnchorController::new(&schema.title),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::UriTable;
    use serde_json::json;

    fn registry() -> UriTable {
        [("link.create".to_string(), "/api/link/create".to_string())]
            .into_iter()
            .collect()
    }

    fn schema() -> EndpointSchema {
        EndpointSchema::from_value(json!({
            "title": "Create Link",
            "subtitle": "Shorten a URL",
            "description": "Creates a new short link.",
            "authentication": "optional",
            "language": "bash",
            "method": "POST",
            "uri": "link.create",
            "parameters": [
                {"key": "url", "type": "string", "description": "Target URL",
                 "example": "https://x.co", "required": true}
            ],
            "response": [
                {"key": "id", "type": "string", "description": "Link id",
                 "example": "abc123"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_render_unknown_uri_fails() {
        let registry = UriTable::new();
        let err = render(&schema(), &RenderContext::new(&registry, "https://api.example.com"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownUri { ref key } if key == "link.create"));
    }

    #[test]
    fn test_render_composes_endpoint_address() {
        let registry = registry();
        let rendered = render(&schema(), &RenderContext::new(&registry, "https://api.example.com"))
            .unwrap();
        assert_eq!(
            rendered.http_endpoint,
            "POST https://api.example.com/api/link/create"
        );
        assert_eq!(rendered.request.url, "https://api.example.com/api/link/create");
    }

    #[test]
    fn test_render_starts_with_hidden_anchor() {
        let registry = registry();
        let rendered = render(&schema(), &RenderContext::new(&registry, "https://api.example.com"))
            .unwrap();
        assert!(!rendered.anchor_controller.is_visible());
        assert_eq!(rendered.anchor, "create-link");
        assert_eq!(rendered.anchor_controller.anchor_id(), rendered.anchor);
    }

    #[test]
    fn test_render_pretty_prints_with_two_space_indent() {
        let registry = registry();
        let rendered = render(&schema(), &RenderContext::new(&registry, "https://api.example.com"))
            .unwrap();
        assert_eq!(
            rendered.request.body_text,
            "{\n  \"url\": \"https://x.co\"\n}"
        );
    }
}
