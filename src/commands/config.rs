//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get` / `config set`: Read or change a single key
//! - `config path`: Print the config file location

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{API_URL_ENV, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let effective_url = config.api_url();
    let overridden = effective_url != config.api_url;

    let json_output = json!({
        "api_url": effective_url,
        "api_url_from_env": overridden,
        "timeout": config.timeout,
        "page_size": config.page_size,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = format!("{}\n\n", "Configuration:".cyan().bold());
    text_output.push_str(&format!("{}: {}", "api_url".cyan(), effective_url));
    if overridden {
        text_output.push_str(&format!(" {}", format!("(from ${API_URL_ENV})").dimmed()));
    }
    text_output.push('\n');
    text_output.push_str(&format!("{}: {}s\n", "timeout".cyan(), config.timeout));
    text_output.push_str(&format!("{}: {}\n", "page_size".cyan(), config.page_size));
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.clone())
    .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::debug!("saved {key} to {}", Config::config_path().display());

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), value))
    .print(output)
}

pub fn cmd_config_path(output: OutputOptions) -> Result<()> {
    let path = Config::config_path();

    CommandOutput::new(json!({ "path": path.to_string_lossy() }))
        .with_text(path.display().to_string())
        .print(output)
}
