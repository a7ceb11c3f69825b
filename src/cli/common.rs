//! Shared CLI plumbing: error type, exit codes, board path resolution.

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input, unknown selection, or failed check
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// An I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves the board file: the explicit argument, else the configured default.
pub fn resolve_board_path(explicit: Option<&PathBuf>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.clone());
    }

    let config = Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;
    config.paths.default_board.ok_or_else(|| {
        CliError::validation(
            "No board file given. Pass --board <FILE> or set paths.default_board in config.toml",
        )
    })
}
