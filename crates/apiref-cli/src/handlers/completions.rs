//! Shell completion generation handler

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;
use clap::CommandFactory;
use std::io;

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(
        args.shell.to_clap_shell(),
        &mut command,
        "apiref",
        &mut io::stdout(),
    );
    Ok(())
}
