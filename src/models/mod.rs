//! Data models for AAC boards.
//!
//! This module contains the core data structures: the ordered associative
//! array, categories of items, and the board that navigates between them.
//! Models are independent of file formats and of any user interface.

pub mod board;
pub mod category;
pub mod ordered_map;
pub mod page;
pub mod symbol;

// Re-export all model types
pub use board::{Board, BoardError, Outcome};
pub use category::Category;
pub use ordered_map::{MapError, OrderedMap};
pub use page::Page;
pub use symbol::{is_valid_category_symbol, is_valid_symbol, ITEM_MARKER};
