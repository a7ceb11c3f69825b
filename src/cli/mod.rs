//! CLI command handlers for AAC Board.
//!
//! This module provides headless, scriptable access to board navigation and
//! editing for automation and testing. No rendering or speech happens here;
//! spoken text is printed to stdout.

pub mod add;
pub mod check;
pub mod common;
pub mod config;
pub mod select;
pub mod session;
pub mod show;

// Re-export types used by main.rs and tests
pub use add::{AddCategoryArgs, AddItemArgs};
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use select::SelectArgs;
pub use session::SessionArgs;
pub use show::ShowArgs;
