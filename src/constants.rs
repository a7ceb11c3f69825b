//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the binary name and configuration locations.

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "aacboard";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "AACBoard";

/// Log levels accepted by `logging.level` in the config file.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
