//! Board file I/O service.
//!
//! This module centralizes all board file operations, providing a consistent
//! interface for loading and saving board files.

use anyhow::{Context, Result};
use std::path::Path;

use crate::{models::Board, parser};

/// Service for managing board file I/O operations.
pub struct BoardService;

impl BoardService {
    /// Loads a board from a board file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::services::BoardService;
    ///
    /// let board = BoardService::load(Path::new("board.txt"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Board> {
        parser::parse_board_file(path)
            .with_context(|| format!("Failed to load board from {}", path.display()))
    }

    /// Loads a board, or starts a new one whose home is `home_key` if the file
    /// does not exist yet.
    pub fn load_or_new(path: &Path, home_key: &str, home_name: &str) -> Result<Board> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::info!(path = %path.display(), "board file not found, starting a new board");
        Board::new(home_key, home_name)
            .with_context(|| format!("Failed to create board for {}", path.display()))
    }

    /// Saves a board to a board file.
    ///
    /// This performs an atomic write, so the file is never left half-written.
    pub fn save(board: &Board, path: &Path) -> Result<()> {
        parser::save_board_file(board, path)
            .with_context(|| format!("Failed to save board to {}", path.display()))
    }
}
