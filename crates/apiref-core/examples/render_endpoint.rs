//! Example demonstrating the endpoint render pipeline
//!
//! Run with: cargo run --example render_endpoint

use apiref_core::{render, EndpointSchema, RenderContext, StaticCredential, UriTable};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = EndpointSchema::from_value(json!({
        "title": "Create Link",
        "subtitle": "Shorten a URL into a new link",
        "description": "Creates a new short link pointing at the given URL.",
        "authentication": "optional",
        "language": "bash",
        "method": "POST",
        "uri": "link.create",
        "parameters": [
            {"key": "url", "type": "string", "description": "Target URL",
             "example": "https://x.co", "required": true},
            {"key": "title", "type": "string", "description": "Optional display title",
             "required": false}
        ],
        "response": [
            {"key": "id", "type": "string", "description": "Identifier of the new link",
             "example": "abc123"}
        ],
        "errors": [
            {"failure": "failure_incomplete_params",
             "description": "A required parameter is missing."}
        ]
    }))?;

    let mut registry = UriTable::new();
    registry.insert("link.create", "/api/link/create");
    schema.validate(&registry)?;

    let credential = StaticCredential::new("demo-api-key");
    let ctx = RenderContext::new(&registry, "https://demo.linkshort.example")
        .with_credentials(&credential);
    let rendered = render(&schema, &ctx)?;

    println!("=== Heading ===\n");
    println!("{}  (#{})", rendered.title, rendered.anchor);
    println!("{}", rendered.authentication_label);

    println!("\n=== Example request ===\n");
    println!("{} {}", rendered.request.method, rendered.request.url);
    println!("{}", rendered.request.body_text);

    println!("\n=== Example response ===\n");
    println!("{}", rendered.response_text);

    println!("\n=== Parameters ===\n");
    println!("{}", rendered.parameter_table.header.join(" | "));
    for row in &rendered.parameter_table.rows {
        println!("{}", row.join(" | "));
    }

    // Hover interaction owned by this rendered instance
    let mut controller = rendered.anchor_controller;
    controller.hover_enter();
    println!("\nanchor glyph visible: {}", controller.is_visible());
    controller.hover_leave();
    println!("anchor glyph visible: {}", controller.is_visible());

    Ok(())
}
