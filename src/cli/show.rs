//! Show command: print the current view or the whole board.

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::{Board, Category};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show the current category, or every category with --all
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Path to board file (defaults to paths.default_board from config)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Show every category instead of only the current one
    #[arg(long)]
    pub all: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
pub(crate) struct ItemEntry {
    pub(crate) image_loc: String,
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryEntry {
    pub(crate) key: String,
    pub(crate) name: String,
    pub(crate) items: Vec<ItemEntry>,
}

impl CategoryEntry {
    pub(crate) fn from_category(key: &str, category: &Category) -> Self {
        Self {
            key: key.to_string(),
            name: category.name().to_string(),
            items: category
                .items()
                .map(|(image_loc, text)| ItemEntry {
                    image_loc: image_loc.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ShowResponse {
    home: String,
    current: String,
    categories: Vec<CategoryEntry>,
}

fn build_response(board: &Board, all: bool) -> ShowResponse {
    let categories = if all {
        board
            .categories()
            .map(|(key, category)| CategoryEntry::from_category(key, category))
            .collect()
    } else {
        vec![CategoryEntry::from_category(
            board.current_key(),
            board.current(),
        )]
    };

    ShowResponse {
        home: board.home_key().to_string(),
        current: board.current_key().to_string(),
        categories,
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_ref())?;
        let board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        let response = build_response(&board, self.all);

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for category in &response.categories {
            let marker = if category.key == response.current { "*" } else { " " };
            println!("{} {} ({})", marker, category.name, category.key);

            if category.items.is_empty() {
                println!("    (no items)");
            }
            for item in &category.items {
                println!("    {:<40} {}", item.image_loc, item.text);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_board_str;

    #[test]
    fn test_build_response_current_only() {
        let board = parse_board_str("a.png first\n>x.png ex\nb.png second\n>y.png why\n").unwrap();
        let response = build_response(&board, false);

        assert_eq!(response.home, "a.png");
        assert_eq!(response.current, "b.png");
        assert_eq!(response.categories.len(), 1);
        assert_eq!(response.categories[0].name, "second");
        assert_eq!(response.categories[0].items[0].text, "why");
    }

    #[test]
    fn test_build_response_all() {
        let board = parse_board_str("a.png first\n>x.png ex\nb.png second\n").unwrap();
        let response = build_response(&board, true);

        let keys: Vec<_> = response.categories.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["a.png", "b.png"]);
        assert!(response.categories[1].items.is_empty());
    }
}
