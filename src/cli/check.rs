//! Check command: verify a board file survives a write/read round trip.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::cli::show::CategoryEntry;
use crate::models::Board;
use crate::parser::{generate_board_text, parse_board_str};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check that a board parses and round-trips through the file format
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Path to board file (defaults to paths.default_board from config)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    valid: bool,
    categories: usize,
    items: usize,
    home: String,
}

/// Flattened category/key/text content of a board, in declaration order.
fn snapshot(board: &Board) -> Vec<(String, String, Vec<(String, String)>)> {
    board
        .categories()
        .map(|(key, category)| {
            let entry = CategoryEntry::from_category(key, category);
            (
                entry.key,
                entry.name,
                entry
                    .items
                    .into_iter()
                    .map(|item| (item.image_loc, item.text))
                    .collect(),
            )
        })
        .collect()
}

/// Writes the board out, reads it back, and compares the two.
fn verify_round_trip(board: &Board) -> CliResult<()> {
    let text = generate_board_text(board).map_err(|e| CliError::validation(e.to_string()))?;
    let reloaded = parse_board_str(&text)
        .map_err(|e| CliError::validation(format!("Written board does not parse: {e}")))?;

    if snapshot(&reloaded) != snapshot(board) {
        return Err(CliError::validation(
            "Board content changed after a write/read round trip",
        ));
    }
    if reloaded.home_key() != board.home_key() {
        return Err(CliError::validation(
            "Home category changed after a write/read round trip",
        ));
    }

    Ok(())
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_ref())?;
        let board = BoardService::load(&path)
            .map_err(|e| CliError::validation(format!("Failed to load board: {e:#}")))?;

        verify_round_trip(&board)?;

        let response = CheckResponse {
            valid: true,
            categories: board.category_count(),
            items: board.item_count(),
            home: board.home_key().to_string(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!(
                "Board OK: {} categories, {} items (home: {})",
                response.categories, response.items, response.home
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;

    #[test]
    fn test_verify_round_trip_ok() {
        let board = parse_board_str(
            "img/food/plate.png food\n>img/food/fries.png french fries\nimg/clothing/hanger.png clothing\n",
        )
        .unwrap();
        assert!(verify_round_trip(&board).is_ok());
    }

    #[test]
    fn test_verify_round_trip_unencodable() {
        let mut board = Board::new("a.png", "first").unwrap();
        board.add_item("x.png", "line\nbreak");

        let err = verify_round_trip(&board).unwrap_err();
        assert!(err.message.contains("line break"));
    }

    #[test]
    fn test_verify_round_trip_leading_whitespace_unencodable() {
        let mut board = Board::new("a.png", "first").unwrap();
        board.add_item("x.png", "  padded");

        let err = verify_round_trip(&board).unwrap_err();
        assert!(err.message.contains("starts with whitespace"));
    }
}
