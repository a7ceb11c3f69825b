//! Board file parsing.
//!
//! A board file is line-oriented. A line whose first token does not start with
//! `>` declares (or re-activates) a category; a line starting with `>` adds an
//! item to the most recently active category:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```
//!
//! The first whitespace run separates the key from the text; everything after
//! it is kept, so spoken text may contain spaces. A line with an empty first
//! token (an empty line, or one starting with whitespace) ends the board.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::constants::APP_BINARY_NAME;
use crate::models::{Board, BoardError, Page, ITEM_MARKER};

/// One classified line of a board file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardLine<'a> {
    /// Empty first token: stop reading
    End,
    /// `<key> <name>`
    Category { key: &'a str, name: &'a str },
    /// `><key> <text>`
    Item { key: &'a str, text: &'a str },
}

/// Splits a line at its first whitespace run into `(first_token, remainder)`.
fn split_record(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (line, ""),
    }
}

fn classify(line: &str) -> BoardLine<'_> {
    let (token, rest) = split_record(line);

    if token.is_empty() {
        return BoardLine::End;
    }

    match token.strip_prefix(ITEM_MARKER) {
        Some(key) => BoardLine::Item { key, text: rest },
        None => BoardLine::Category {
            key: token,
            name: rest,
        },
    }
}

/// Parses a board from any buffered source, one line at a time.
///
/// The first category declared becomes home; whichever category was active
/// when reading stopped becomes current.
///
/// # Errors
///
/// Returns errors for:
/// - I/O failures while reading
/// - An item line before any category line
/// - A source that declares no category at all
pub fn parse_board_reader(source: impl BufRead) -> Result<Board, BoardError> {
    let mut board: Option<Board> = None;

    for (idx, raw) in source.lines().enumerate() {
        let raw = raw?;
        // `lines` keeps a lone trailing `\r` on a last line with no `\n`
        // `lines` leaves the `\r` of a final CRLF line with no `\n`
        let line = raw.strip_suffix('\r').unwrap_or(raw.as_str());
        let line_num = idx + 1;

        match classify(line) {
            BoardLine::End => {
                tracing::debug!(line = line_num, "empty first token, stopping board parse");
                break;
            }
            BoardLine::Item { key, text } => {
                let board = board
                    .as_mut()
                    .ok_or(BoardError::OrphanItem { line: line_num })?;
                board.add_item(key, text);
            }
            BoardLine::Category { key, name } => {
                if let Some(existing) = board.as_mut() {
                    // Re-declaring a known key only re-activates it
                    existing.add_category(key, name);
                    existing.enter(key)?;
                    continue;
                }
                board = Some(Board::new(key, name)?);
            }
        }
    }

    let board = board.ok_or(BoardError::NoCategories)?;
    tracing::debug!(
        categories = board.category_count(),
        items = board.item_count(),
        current = board.current_key(),
        "parsed board"
    );
    Ok(board)
}

/// Parses a board from a string.
pub fn parse_board_str(content: &str) -> Result<Board, BoardError> {
    parse_board_reader(content.as_bytes())
}

/// Parses a board file from disk.
///
/// # Errors
///
/// Returns errors for:
/// - File not found, or a path that is not a file
/// - I/O failures while reading
/// - Structural problems reported by [`parse_board_reader`]
pub fn parse_board_file(path: &Path) -> Result<Board> {
    if !path.exists() {
        anyhow::bail!(
            "Board file not found: {}\n\n\
             Please check the file path and try again.\n\
             To create a board, run: {} add-category --board <FILE> --key <KEY> --name <NAME>",
            path.display(),
            APP_BINARY_NAME
        );
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open board file: {}", path.display()))?;

    parse_board_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse board file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
";

    #[test]
    fn test_split_record() {
        assert_eq!(split_record("a b c"), ("a", "b c"));
        assert_eq!(split_record("a   b  c"), ("a", "b  c"));
        assert_eq!(split_record("a\tb"), ("a", "b"));
        assert_eq!(split_record("solo"), ("solo", ""));
        assert_eq!(split_record(" lead"), ("", "lead"));
        assert_eq!(split_record(""), ("", ""));
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(
            classify("img/food/plate.png food"),
            BoardLine::Category {
                key: "img/food/plate.png",
                name: "food"
            }
        );
        assert_eq!(
            classify(">img/food/fries.png french fries"),
            BoardLine::Item {
                key: "img/food/fries.png",
                text: "french fries"
            }
        );
        assert_eq!(classify(""), BoardLine::End);
        assert_eq!(classify("   indented"), BoardLine::End);
    }

    #[test]
    fn test_parse_sample_board() {
        let board = parse_board_str(SAMPLE).unwrap();

        assert_eq!(board.category_count(), 2);
        assert_eq!(board.item_count(), 3);
        assert_eq!(board.category_name(), "clothing");
        assert_eq!(board.home_key(), "img/food/plate.png");
        assert_eq!(
            board
                .category("img/food/plate.png")
                .unwrap()
                .text_for("img/food/fries.png"),
            Some("french fries")
        );
    }

    #[test]
    fn test_multi_word_text_is_kept() {
        let board = parse_board_str("k.png greetings\n>hi.png hello there, how are you\n").unwrap();
        assert_eq!(
            board.current().text_for("hi.png"),
            Some("hello there, how are you")
        );
    }

    #[test]
    fn test_empty_line_stops_parsing() {
        let source = "a.png first\n>x.png ex\n\nb.png second\n>y.png why\n";
        let board = parse_board_str(source).unwrap();

        assert_eq!(board.category_count(), 1);
        assert!(!board.has_category("b.png"));
        assert_eq!(board.image_locs(), vec!["x.png"]);
    }

    #[test]
    fn test_redeclared_category_resumes() {
        let source = "a.png first\n>x.png ex\nb.png second\na.png ignored name\n>z.png zed\n";
        let board = parse_board_str(source).unwrap();

        assert_eq!(board.category_count(), 2);
        assert_eq!(board.category_name(), "first");
        assert_eq!(board.image_locs(), vec!["x.png", "z.png"]);
    }

    #[test]
    fn test_item_without_key_is_dropped() {
        let board = parse_board_str("a.png first\n> orphan text\n>x.png ex\n").unwrap();
        assert_eq!(board.image_locs(), vec!["x.png"]);
    }

    #[test]
    fn test_item_without_text() {
        let board = parse_board_str("a.png first\n>x.png\n").unwrap();
        assert!(board.has_image("x.png"));
        assert_eq!(board.current().text_for("x.png"), Some(""));
    }

    #[test]
    fn test_item_before_category_is_rejected() {
        let err = parse_board_str(">x.png ex\na.png first\n").unwrap_err();
        assert!(matches!(err, BoardError::OrphanItem { line: 1 }));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert!(matches!(parse_board_str(""), Err(BoardError::NoCategories)));
        assert!(matches!(
            parse_board_str("\na.png first\n"),
            Err(BoardError::NoCategories)
        ));
    }

    #[test]
    fn test_crlf_line_endings() {
        let board = parse_board_str("a.png first\r\n>x.png ex\r\n").unwrap();
        assert_eq!(board.category_name(), "first");
        assert_eq!(board.current().text_for("x.png"), Some("ex"));
    }

    #[test]
    fn test_final_carriage_return_without_newline() {
        let board = parse_board_str("a.png first\r\n>x.png ex\r").unwrap();
        assert_eq!(board.current().text_for("x.png"), Some("ex"));

        let board = parse_board_str("a.png first\r").unwrap();
        assert_eq!(board.category_name(), "first");
        assert!(board.write_to(Vec::new()).is_ok());
    }

    #[test]
    fn test_parse_board_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        drop(file);

        let board = parse_board_file(&path).unwrap();
        assert_eq!(board.category_count(), 2);
    }

    #[test]
    fn test_parse_board_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = parse_board_file(&temp_dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("Board file not found"));
    }

    #[test]
    fn test_parse_board_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = parse_board_file(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Path is not a file"));
    }
}
