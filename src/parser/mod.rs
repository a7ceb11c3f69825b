//! Parsing and serialization of board files.
//!
//! This module handles reading boards from the line-oriented board format and
//! writing them back so they can be reloaded later.

pub mod board_file;
pub mod board_gen;

// Re-export commonly used functions
pub use board_file::{parse_board_file, parse_board_reader, parse_board_str};
pub use board_gen::{generate_board_text, save_board_file, write_board};
