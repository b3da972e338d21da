//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Apiref CLI - render API reference artifacts from endpoint schemas
///
/// Validates declarative endpoint schemas and previews the rendered
/// reference artifacts: example request and response, parameter and error
/// tables, and the section anchor.
#[derive(Parser, Debug)]
#[command(
    name = "apiref",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "APIREF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an endpoint schema against the boundary rules
    Validate(ValidateArgs),

    /// Render an endpoint schema and preview the artifacts
    Preview(PreviewArgs),

    /// Manage apiref configuration
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the endpoint schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Echo the parsed schema after validation
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the preview command
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Path to the endpoint schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Example-presence policy for payload synthesis
    #[arg(short, long, value_enum, default_value = "truthy")]
    pub policy: PolicyArg,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default configuration files
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),

    /// Get a configuration value
    Get(ConfigGetArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Initialize user config (~/.config/apiref/config.toml)
    #[arg(long)]
    pub user: bool,

    /// Initialize project config (.apiref.toml)
    #[arg(long)]
    pub project: bool,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Arguments for config get
#[derive(Parser, Debug)]
pub struct ConfigGetArgs {
    /// Configuration key (e.g., base_url, output.format, uris.link.create)
    pub key: String,
}

/// Serialization format for config show
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
}

/// Example-presence policy for payload synthesis
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Drop falsy examples (0, "", false), matching the documented format
    Truthy,
    /// Keep every example that was given
    Explicit,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<PolicyArg> for apiref_core::ExamplePolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Truthy => apiref_core::ExamplePolicy::Truthy,
            PolicyArg::Explicit => apiref_core::ExamplePolicy::Explicit,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["apiref", "-vv", "validate", "schema.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = Cli::parse_from(["apiref", "--quiet", "validate", "schema.json"]);
        assert_eq!(quiet.verbosity_level(), 0);
    }

    #[test]
    fn test_policy_conversion() {
        assert_eq!(
            apiref_core::ExamplePolicy::from(PolicyArg::Truthy),
            apiref_core::ExamplePolicy::Truthy
        );
        assert_eq!(
            apiref_core::ExamplePolicy::from(PolicyArg::Explicit),
            apiref_core::ExamplePolicy::Explicit
        );
    }

    #[test]
    fn test_config_get_parses_key_path() {
        let cli = Cli::parse_from(["apiref", "config", "get", "uris.link.create"]);
        match cli.command {
            Commands::Config(args) => match args.action {
                ConfigAction::Get(get) => assert_eq!(get.key, "uris.link.create"),
                _ => panic!("expected config get"),
            },
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn test_preview_defaults() {
        let cli = Cli::parse_from(["apiref", "preview", "schema.json"]);
        match cli.command {
            Commands::Preview(args) => {
                assert_eq!(args.policy, PolicyArg::Truthy);
                assert!(args.save_to.is_none());
            }
            _ => panic!("expected preview command"),
        }
    }
}
