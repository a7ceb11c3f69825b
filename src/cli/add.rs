//! Commands that grow a board: add items and add categories.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::{is_valid_category_symbol, is_valid_symbol, Page};
use crate::services::BoardService;
use clap::Args;
use std::path::PathBuf;

/// Add an item to a category and save the board
#[derive(Debug, Clone, Args)]
pub struct AddItemArgs {
    /// Path to board file (defaults to paths.default_board from config)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image location of the item (no whitespace)
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// Text spoken when the item is selected
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub text: String,

    /// Category key to add to (defaults to the category active after loading)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// Add a category and save the board, creating the file if needed
#[derive(Debug, Clone, Args)]
pub struct AddCategoryArgs {
    /// Path to board file (defaults to paths.default_board from config)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image location selecting the category (no whitespace, no leading '>')
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// Display name of the category
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

fn validate_text(label: &str, text: &str) -> CliResult<()> {
    if text.contains(['\n', '\r']) {
        return Err(CliError::validation(format!(
            "{label} cannot contain line breaks"
        )));
    }
    if text.starts_with(char::is_whitespace) {
        return Err(CliError::validation(format!(
            "{label} cannot start with whitespace"
        )));
    }
    Ok(())
}

impl AddItemArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        if !is_valid_symbol(&self.key) {
            return Err(CliError::validation(format!(
                "Invalid item key '{}': keys must be non-empty and contain no whitespace",
                self.key
            )));
        }
        validate_text("Text", &self.text)?;

        let path = resolve_board_path(self.board.as_ref())?;
        let mut board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        let category_key = match &self.category {
            Some(category) => {
                board
                    .add_item_to(category, &self.key, &self.text)
                    .map_err(|e| CliError::validation(e.to_string()))?;
                category.clone()
            }
            None => {
                board.add_item(&self.key, &self.text);
                board.current_key().to_string()
            }
        };

        BoardService::save(&board, &path)
            .map_err(|e| CliError::io(format!("Failed to save board: {e:#}")))?;

        println!("Item '{}' added to category '{}'.", self.key, category_key);
        Ok(())
    }
}

impl AddCategoryArgs {
    /// Execute the add-category command
    pub fn execute(&self) -> CliResult<()> {
        if !is_valid_category_symbol(&self.key) {
            return Err(CliError::validation(format!(
                "Invalid category key '{}': keys must be non-empty, contain no whitespace, and not start with '>'",
                self.key
            )));
        }
        validate_text("Name", &self.name)?;

        let path = resolve_board_path(self.board.as_ref())?;
        let existed = path.exists();
        let mut board = BoardService::load_or_new(&path, &self.key, &self.name)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        if existed && !board.add_category(&self.key, self.name.as_str()) {
            return Err(CliError::validation(format!(
                "Category '{}' already exists",
                self.key
            )));
        }

        BoardService::save(&board, &path)
            .map_err(|e| CliError::io(format!("Failed to save board: {e:#}")))?;

        println!("Category '{}' added successfully.", self.key);
        Ok(())
    }
}
