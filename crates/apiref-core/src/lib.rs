//! Apiref Core - rendering engine for declarative API reference pages
//!
//! This crate turns a declarative endpoint schema into the render-ready
//! artifacts a documentation host needs: a synthesized example request, a
//! synthesized example response, tabular parameter/response/error listings,
//! and a deep-linkable section anchor with its hover affordance state.
//!
//! # Main Components
//!
//! - **Schema Model**: serde-backed endpoint description with fail-fast
//!   boundary validation
//! - **Example Synthesizer**: pure payload construction from parameter
//!   metadata, with a switchable example-presence policy
//! - **Anchor Controller**: stable anchor identifiers plus the per-render
//!   glyph visibility state machine
//! - **Presentation Adapter**: label lookups and table specifications for
//!   the host's renderers
//!
//! The host supplies its collaborators (URI registry, base URL, credential
//! source, navigator) explicitly through [`RenderContext`]; there is no
//! ambient configuration.
//!
//! # Example
//!
//! ```
//! use apiref_core::{render, EndpointSchema, RenderContext, UriTable};
//!
//! fn example() -> apiref_core::Result<()> {
//!     let schema: EndpointSchema = serde_json::from_str(
//!         r#"{
//!             "title": "Create Link",
//!             "subtitle": "Shorten a URL",
//!             "description": "Creates a new short link.",
//!             "authentication": "optional",
//!             "language": "bash",
//!             "method": "POST",
//!             "uri": "link.create",
//!             "parameters": [
//!                 {"key": "url", "type": "string", "description": "Target URL",
//!                  "example": "https://x.co", "required": true}
//!             ],
//!             "response": [],
//!             "errors": []
//!         }"#,
//!     )?;
//!
//!     let registry: UriTable =
//!         [("link.create".to_string(), "/api/link/create".to_string())]
//!             .into_iter()
//!             .collect();
//!     schema.validate(&registry)?;
//!
//!     let rendered = render(&schema, &RenderContext::new(&registry, "https://api.example.com"))?;
//!     assert_eq!(rendered.anchor, "create-link");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod render;
pub mod schema;
pub mod traits;

// Re-export the public surface for convenience
pub use error::{Error, Result};
pub use render::anchor::{anchor_id, AnchorController, AnchorVisibility};
pub use render::display::{
    authentication_label, TableSpec, ERROR_HEADER, PARAMETER_HEADER, RESPONSE_HEADER,
};
pub use render::synthesis::{
    synthesize, synthesize_request, synthesize_response, ExamplePolicy,
};
pub use render::{render, RenderContext, RenderedEndpoint, RequestExample};
pub use schema::{
    Authentication, EndpointSchema, ErrorDescriptor, Method, ParameterDescriptor,
};
pub use traits::{CredentialSource, Navigator, StaticCredential, UriRegistry, UriTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
