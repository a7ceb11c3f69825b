//! Rules for symbol (image-location) keys.

/// Prefix marking an item line in the board file format.
pub const ITEM_MARKER: char = '>';

/// Returns true if `key` can be stored and written back to a board file.
///
/// Keys must be non-empty and contain no whitespace, since whitespace is the
/// only field delimiter of the format.
pub fn is_valid_symbol(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}

/// Returns true if `key` can name a category.
///
/// A category key starting with the item marker would be read back as an item.
pub fn is_valid_category_symbol(key: &str) -> bool {
    is_valid_symbol(key) && !key.starts_with(ITEM_MARKER)
}
