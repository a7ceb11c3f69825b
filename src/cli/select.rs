//! Select command: replay a sequence of symbol selections against a board.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::{Board, BoardError, Outcome, Page};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Select symbols in order, printing spoken text and navigation
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// Path to board file (defaults to paths.default_board from config)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Start from the home category instead of the last one declared
    #[arg(long)]
    pub from_home: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Image locations to select, in order
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
enum SelectionRecord {
    Navigate { key: String, category: String },
    Speak { key: String, text: String },
}

#[derive(Debug, Serialize)]
struct SelectResponse {
    selections: Vec<SelectionRecord>,
    current: String,
}

/// Applies every selection, stopping at the first miss.
fn run_selections(board: &mut Board, keys: &[String]) -> Result<Vec<SelectionRecord>, BoardError> {
    keys.iter()
        .map(|key| {
            Ok(match board.select(key)? {
                Outcome::Navigated { name, .. } => SelectionRecord::Navigate {
                    key: key.clone(),
                    category: name,
                },
                Outcome::Spoken(text) => SelectionRecord::Speak {
                    key: key.clone(),
                    text,
                },
            })
        })
        .collect()
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_ref())?;
        let mut board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        if self.from_home {
            board.reset();
        }

        let selections =
            run_selections(&mut board, &self.keys).map_err(|e| CliError::validation(e.to_string()))?;

        let response = SelectResponse {
            selections,
            current: board.category_name().to_string(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for record in &response.selections {
            match record {
                SelectionRecord::Navigate { category, .. } => println!("> {category}"),
                SelectionRecord::Speak { text, .. } => println!("{text}"),
            }
        }

        Ok(())
    }
}
