//! Configuration command handlers

use crate::cli::{
    ConfigAction, ConfigArgs, ConfigFormat, ConfigGetArgs, ConfigInitArgs, ConfigShowArgs,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config),
        ConfigAction::Get(get_args) => handle_config_get(get_args, config),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    // If no specific option is given, default to both
    let init_user = args.user || !args.project;
    let init_project = args.project || !args.user;

    if init_user {
        let user_config_path = Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?;

        if user_config_path.exists() && !args.force {
            output.warning(&format!(
                "User config already exists at {}",
                user_config_path.display()
            ))?;
        } else {
            let path = Config::create_default_user_config()?;
            output.success(&format!("✓ Created user config at {}", path.display()))?;
        }
    }

    if init_project {
        let project_config_path = std::path::Path::new(".apiref.toml");

        if project_config_path.exists() && !args.force {
            output.warning("Project config already exists at .apiref.toml")?;
        } else {
            Config::create_default_project_config()?;
            output.success("✓ Created project config at .apiref.toml")?;
        }
    }

    Ok(())
}

/// Handle config show subcommand
fn handle_config_show(args: ConfigShowArgs, config: &Config) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    println!("{}", content);
    Ok(())
}

/// Handle config get subcommand
fn handle_config_get(args: ConfigGetArgs, config: &Config) -> Result<()> {
    println!("{}", get_config_value(config, &args.key)?);
    Ok(())
}

/// Get a configuration value by key path
fn get_config_value(config: &Config, key: &str) -> Result<String> {
    if let Some(uri_key) = key.strip_prefix("uris.") {
        return config
            .uris
            .get(uri_key)
            .cloned()
            .ok_or_else(|| Error::config(format!("Unknown URI key: {}", uri_key)));
    }

    match key {
        "base_url" => Ok(config.base_url.clone()),
        "api_key" => Ok(config.api_key.clone().unwrap_or_default()),
        "uris" => {
            let mut keys: Vec<&str> = config.uris.keys().map(String::as_str).collect();
            keys.sort_unstable();
            Ok(keys.join("\n"))
        }
        "output.format" => Ok(config.output.format.clone()),
        "output.color" => Ok(config.output.color.to_string()),
        "logging.level" => Ok(config.logging.level.clone()),
        "logging.format" => Ok(config.logging.format.clone()),
        _ => Err(Error::config(format!("Unknown configuration key: {}", key))),
    }
}
