//! Board file generation (serialization).
//!
//! Produces text readable by [`crate::parser::board_file`]: every category in
//! declaration order, each followed by its items prefixed with `>`. The home
//! category is always written first, so it stays home after reloading.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{Board, BoardError, ITEM_MARKER};

/// Generates the full board file text.
///
/// # Errors
///
/// Returns [`BoardError::Unencodable`] if a category name or spoken text
/// contains a line break or starts with whitespace; the reader would split
/// the former and trim the latter.
pub fn generate_board_text(board: &Board) -> Result<String, BoardError> {
    let mut output = String::new();

    for (key, category) in board.categories() {
        push_record(&mut output, key, category.name())?;

        for (image_loc, text) in category.items() {
            push_record(&mut output, &format!("{ITEM_MARKER}{image_loc}"), text)?;
        }
    }

    Ok(output)
}

/// Appends one `<key> <text>` line; the bare key when `text` is empty.
fn push_record(output: &mut String, key: &str, text: &str) -> Result<(), BoardError> {
    let reason = if text.contains(['\n', '\r']) {
        Some("contains a line break")
    } else if text.starts_with(char::is_whitespace) {
        Some("starts with whitespace")
    } else {
        None
    };

    if let Some(reason) = reason {
        return Err(BoardError::Unencodable {
            key: key.trim_start_matches(ITEM_MARKER).to_string(),
            reason,
        });
    }

    output.push_str(key);
    if !text.is_empty() {
        output.push(' ');
        output.push_str(text);
    }
    output.push('\n');
    Ok(())
}

/// Writes the board to any sink.
///
/// Nothing is written if the board cannot be encoded.
pub fn write_board(board: &Board, mut sink: impl Write) -> Result<(), BoardError> {
    let text = generate_board_text(board)?;
    sink.write_all(text.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Saves the board to a file.
///
/// This performs an atomic write using a temp file + rename pattern so a
/// failed save never leaves a half-written board behind.
///
/// # Errors
///
/// Returns errors for:
/// - Boards that cannot be encoded
/// - File I/O failures and permission issues
/// - Atomic rename failures
pub fn save_board_file(board: &Board, path: &Path) -> Result<()> {
    let text = generate_board_text(board).context("Failed to encode board")?;
    atomic_write(path, &text)?;

    tracing::info!(
        path = %path.display(),
        categories = board.category_count(),
        items = board.item_count(),
        "saved board"
    );
    Ok(())
}

/// Temporary sibling path used while saving `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

/// Performs an atomic file write using temp file + rename pattern.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    if let Err(e) = std::fs::rename(&temp_path, path) {
        // Best effort; the rename error is the one worth reporting
        let _ = std::fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to rename temporary file to: {}", path.display()));
    }

    Ok(())
}
