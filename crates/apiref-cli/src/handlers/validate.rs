//! Validation command handler

use super::utils;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use tracing::{info, instrument, warn};

/// Handle the validate command
#[instrument(skip(config, output), fields(file = %args.schema.display()))]
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details(
        "validate_command",
        &format!("file: {}", args.schema.display()),
    );
    info!("Starting validation");
    output.info(&format!(
        "Validating endpoint schema: {}",
        args.schema.display()
    ))?;

    // Parsing already enforces the closed enum sets
    let schema = utils::load_schema(&args.schema)?;

    let registry = config.uri_table();
    match schema.validate(&registry) {
        Ok(()) => {
            info!("Validation completed successfully");
            output.success("✓ Endpoint schema is valid")?;

            if args.detailed {
                output.section("Schema")?;
                output.data(&schema)?;
            }
            Ok(())
        }
        Err(violation) => {
            warn!(error = %violation, "Validation failed");
            output.error("✗ Endpoint schema failed validation")?;
            output.error(&format!("  {}", violation))?;
            Err(violation.into())
        }
    }
}
