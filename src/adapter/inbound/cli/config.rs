//! Handlers for `config show` and `config validate`.

use std::path::Path;

use crate::adapter::inbound::cli::command::ConfigCommand;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute a `config` subcommand against an already loaded configuration.
pub fn execute(command: &ConfigCommand, config: &Config, path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommand::Show => show(config),
        ConfigCommand::Validate => validate(config, path),
    }
}

fn show(config: &Config) -> Result<()> {
    if output::is_json() {
        return output::json_payload("config", config);
    }

    output::value(config.to_toml()?.trim_end());
    Ok(())
}

fn validate(config: &Config, path: Option<&Path>) -> Result<()> {
    config.validate()?;

    match path {
        Some(path) => output::success(&format!("{} is valid", path.display())),
        None => output::warning("No --config given; built-in defaults are valid"),
    }
    Ok(())
}
