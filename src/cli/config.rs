//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::LOG_LEVELS;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Board file used when a command gets no --board
    #[arg(long, value_name = "FILE")]
    default_board: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Serialize, Debug)]
struct ConfigOutput {
    file: String,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_board: Option<String>,
    log_level: String,
}

impl ConfigOutput {
    fn from_config(config: &Config) -> CliResult<Self> {
        let file = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}")))?;

        Ok(Self {
            file: file.to_string_lossy().to_string(),
            exists: Config::exists(),
            default_board: config
                .paths
                .default_board
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            log_level: config.logging.level.clone(),
        })
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = ConfigOutput::from_config(&config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            println!("{json}");
        } else {
            let origin = if output.exists { "" } else { " (not created, using defaults)" };
            println!("Config file: {}{origin}", output.file);
            println!(
                "  Default board: {}",
                output.default_board.as_deref().unwrap_or("(not configured)")
            );
            println!("  Log level: {}", output.log_level);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.default_board.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-board or --log-level",
            ));
        }

        // Start from defaults when the current file does not load
        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable configuration: {e:#}");
            Config::default()
        });

        if let Some(path) = &self.default_board {
            config
                .set_default_board(path)
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
        }

        if let Some(level) = &self.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level '{level}'. Must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = level;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_requires_an_option() {
        let args = ConfigSetArgs {
            default_board: None,
            log_level: None,
        };
        let err = args.execute().unwrap_err();
        assert!(err.message.contains("At least one configuration option"));
    }
}
