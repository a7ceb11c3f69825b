//! Interactive session: drive the board's navigation from stdin.
//!
//! Each input line is either a symbol key to select or a `:`-prefixed command:
//!
//! - `:show` lists the current category's items
//! - `:reset` returns to the home category
//! - `:add <key> [text]` adds an item to the current category
//! - `:save` writes the board back to its file
//! - `:quit` ends the session (so does end of input)

use crate::cli::common::{resolve_board_path, CliError, CliResult};
use crate::models::{Board, BoardError, Outcome, Page};
use crate::services::BoardService;
use anyhow::Result;
use clap::Args;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Run an interactive selection session reading commands from stdin
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Path to board file (defaults to paths.default_board from config)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Start from the home category instead of the last one declared
    #[arg(long)]
    pub from_home: bool,
}

fn print_view(board: &Board, out: &mut impl Write) -> Result<()> {
    writeln!(out, "[{}]", board.category_name())?;
    for image_loc in board.image_locs() {
        writeln!(out, "  {image_loc}")?;
    }
    Ok(())
}

/// Runs commands from `input` until `:quit` or end of input.
fn run_session(
    board: &mut Board,
    input: impl BufRead,
    out: &mut impl Write,
    path: &Path,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim_start()));

        match command {
            ":quit" | ":exit" => break,
            ":show" => print_view(board, out)?,
            ":reset" => {
                board.reset();
                writeln!(out, "> {}", board.category_name())?;
            }
            ":add" => {
                let (key, text) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(key, text)| (key, text.trim_start()));
                board.add_item(key, text);
                if board.has_image(key) {
                    writeln!(out, "+ {key}")?;
                } else {
                    writeln!(out, "! Invalid item key '{key}'")?;
                }
            }
            ":save" => {
                BoardService::save(board, path)?;
                writeln!(out, "Saved {}", path.display())?;
            }
            key => match board.select(key) {
                Ok(Outcome::Navigated { name, .. }) => writeln!(out, "> {name}")?,
                Ok(Outcome::Spoken(text)) => writeln!(out, "{text}")?,
                Err(err @ BoardError::NotFound(_)) => writeln!(out, "! {err}")?,
                Err(err) => return Err(err.into()),
            },
        }
    }

    out.flush()?;
    Ok(())
}

impl SessionArgs {
    /// Execute the session command
    pub fn execute(&self) -> CliResult<()> {
        let path = resolve_board_path(self.board.as_ref())?;
        let mut board = BoardService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))?;

        if self.from_home {
            board.reset();
        }

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        print_view(&board, &mut stdout).map_err(|e| CliError::io(format!("{e:#}")))?;
        run_session(&mut board, stdin.lock(), &mut stdout, &path)
            .map_err(|e| CliError::io(format!("Session failed: {e:#}")))
    }
}
