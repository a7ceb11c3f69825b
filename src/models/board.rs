//! Two-level AAC board: categories of items plus navigation state.

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::models::category::Category;
use crate::models::ordered_map::OrderedMap;
use crate::models::page::Page;
use crate::models::symbol::is_valid_category_symbol;
use crate::parser;

/// Errors raised while building, navigating, or writing a board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The selected key is neither a category nor an item of the current category.
    #[error("Selection not found: {0}")]
    NotFound(String),
    /// A category key was referenced that the board does not hold.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    /// A key that cannot be stored or written back.
    #[error("Invalid symbol key: '{0}'")]
    InvalidKey(String),
    /// The source declared no category before ending.
    #[error("Board declares no categories")]
    NoCategories,
    /// An item line appeared before any category line.
    #[error("Item on line {line} appears before any category")]
    OrphanItem {
        /// 1-based line number in the source
        line: usize,
    },
    /// A name or spoken text that the line format cannot represent.
    #[error("Text for '{key}' {reason} and cannot be written")]
    Unencodable {
        /// Key of the category or item holding the text
        key: String,
        /// What makes the text unrepresentable
        reason: &'static str,
    },
    /// Reading the source or writing the sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result of a successful selection on a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A category symbol was selected and is now current.
    Navigated {
        /// Symbol key of the category
        key: String,
        /// Display name of the category
        name: String,
    },
    /// An item of the current category was selected.
    Spoken(String),
}

impl Outcome {
    /// Text to speak; empty for navigation.
    pub fn text(&self) -> &str {
        match self {
            Self::Navigated { .. } => "",
            Self::Spoken(text) => text,
        }
    }

    /// Returns true if the selection changed the current category.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigated { .. })
    }
}

/// A complete AAC board.
///
/// Holds every category keyed by the symbol used to select it, the home
/// category that [`Board::reset`] returns to, and the category currently shown.
///
/// # Invariants
///
/// - There is always at least one category
/// - `home` and `current` always name a stored category
/// - Category keys are unique, valid symbols that do not start with `>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    categories: OrderedMap<Category>,
    home: usize,
    current: usize,
}

impl Board {
    /// Creates a board holding a single, empty home category.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidKey`] if `home_key` cannot name a category.
    pub fn new(home_key: &str, home_name: impl Into<String>) -> Result<Self, BoardError> {
        if !is_valid_category_symbol(home_key) {
            return Err(BoardError::InvalidKey(home_key.to_string()));
        }

        let mut categories = OrderedMap::new();
        categories
            .insert(home_key, Category::new(home_name))
            .map_err(|_| BoardError::InvalidKey(home_key.to_string()))?;

        Ok(Self {
            categories,
            home: 0,
            current: 0,
        })
    }

    /// Reads a board from a line-oriented source.
    ///
    /// See [`crate::parser::board_file`] for the format.
    pub fn from_reader(source: impl BufRead) -> Result<Self, BoardError> {
        parser::board_file::parse_board_reader(source)
    }

    /// Writes every category and item back in the board file format.
    ///
    /// The board itself is never modified.
    pub fn write_to(&self, sink: impl Write) -> Result<(), BoardError> {
        parser::board_gen::write_board(self, sink)
    }

    /// Registers a new, empty category under `key`.
    ///
    /// Returns false without changing anything if `key` is already a category
    /// or is not a valid category key.
    pub fn add_category(&mut self, key: &str, name: impl Into<String>) -> bool {
        if !is_valid_category_symbol(key) {
            tracing::debug!(key, "dropping category with invalid key");
            return false;
        }
        if self.categories.has_key(key) {
            return false;
        }

        self.categories.insert(key, Category::new(name)).is_ok()
    }

    /// Makes the category under `key` current without consulting items.
    pub fn enter(&mut self, key: &str) -> Result<&Category, BoardError> {
        let slot = self
            .categories
            .position(key)
            .ok_or_else(|| BoardError::UnknownCategory(key.to_string()))?;
        self.current = slot;
        Ok(self.categories.entry(slot).1)
    }

    /// Returns to the home category.
    pub fn reset(&mut self) {
        self.current = self.home;
    }

    /// Adds an item to a specific category, wherever navigation currently is.
    pub fn add_item_to(
        &mut self,
        category_key: &str,
        image_loc: &str,
        text: &str,
    ) -> Result<(), BoardError> {
        let category = self
            .categories
            .get_mut(category_key)
            .map_err(|_| BoardError::UnknownCategory(category_key.to_string()))?;
        category.add_item(image_loc, text);
        Ok(())
    }

    /// The category currently shown.
    pub fn current(&self) -> &Category {
        self.categories.entry(self.current).1
    }

    /// Symbol key of the category currently shown.
    pub fn current_key(&self) -> &str {
        self.categories.entry(self.current).0
    }

    /// The category [`Board::reset`] returns to.
    pub fn home(&self) -> &Category {
        self.categories.entry(self.home).1
    }

    /// Symbol key of the home category.
    pub fn home_key(&self) -> &str {
        self.categories.entry(self.home).0
    }

    /// Looks up a category by its symbol key.
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.get(key).ok()
    }

    /// Returns true if `key` selects a category.
    pub fn has_category(&self, key: &str) -> bool {
        self.categories.has_key(key)
    }

    /// Category keys, in declaration order.
    pub fn category_keys(&self) -> Vec<String> {
        self.categories.keys().map(str::to_string).collect()
    }

    /// Categories with their keys, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter()
    }

    /// Number of categories; at least one, since home always exists.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|(_, category)| category.len()).sum()
    }
}

impl Page for Board {
    type Selection = Result<Outcome, BoardError>;

    fn image_locs(&self) -> Vec<String> {
        self.current().image_locs()
    }

    fn category_name(&self) -> &str {
        self.current().name()
    }

    fn has_image(&self, image_loc: &str) -> bool {
        self.current().has_image(image_loc)
    }

    fn add_item(&mut self, image_loc: &str, text: &str) {
        self.categories
            .entry_mut(self.current)
            .1
            .add_item(image_loc, text);
    }

    /// Navigates when `image_loc` is a category, speaks when it is an item of
    /// the current category, and fails with [`BoardError::NotFound`] otherwise.
    fn select(&mut self, image_loc: &str) -> Result<Outcome, BoardError> {
        if let Some(slot) = self.categories.position(image_loc) {
            self.current = slot;
            let (key, category) = self.categories.entry(slot);
            tracing::debug!(key, name = category.name(), "navigated to category");
            return Ok(Outcome::Navigated {
                key: key.to_string(),
                name: category.name().to_string(),
            });
        }

        match self.current().text_for(image_loc) {
            Some(text) => Ok(Outcome::Spoken(text.to_string())),
            None => Err(BoardError::NotFound(image_loc.to_string())),
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parser::board_file::parse_board_str(source)
    }
}
