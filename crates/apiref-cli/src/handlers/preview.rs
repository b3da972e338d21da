//! Preview command handler

use super::utils;
use crate::cli::PreviewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use apiref_core::{render, RenderContext};
use std::fs;
use tracing::{info, instrument};

/// Handle the preview command
#[instrument(skip(config, output), fields(file = %args.schema.display(), policy = ?args.policy))]
pub fn handle_preview(
    args: PreviewArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details(
        "preview_command",
        &format!("file: {}", args.schema.display()),
    );
    info!("Starting preview");

    let schema = utils::load_schema(&args.schema)?;

    // Boundary validation runs before the pipeline, as the core expects
    let registry = config.uri_table();
    schema.validate(&registry)?;

    let credential = config.credential();
    let mut ctx =
        RenderContext::new(&registry, &config.base_url).with_policy(args.policy.into());
    if let Some(credential) = &credential {
        ctx = ctx.with_credentials(credential);
    }

    let rendered = render(&schema, &ctx)?;
    info!(anchor = %rendered.anchor, "Endpoint rendered");

    if let Some(path) = &args.save_to {
        fs::write(path, serde_json::to_string_pretty(&rendered)?)?;
        output.info(&format!("Saved rendered endpoint to {}", path.display()))?;
        return Ok(());
    }

    output.rendered_endpoint(&rendered)
}
