//! A named group of selectable items.

use crate::models::ordered_map::OrderedMap;
use crate::models::page::Page;
use crate::models::symbol::is_valid_symbol;

/// A flat group of items, each mapping an image location to the text it speaks.
///
/// The category's own symbol key lives in the owning board; a category only
/// knows its display name.
///
/// # Invariants
///
/// - Item keys are unique within the category
/// - Item keys are valid symbols (non-empty, no whitespace)
/// - Items are never removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: OrderedMap<String>,
}

impl Category {
    /// Creates an empty category with the given display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use aacboard::models::{Category, Page};
    ///
    /// let mut food = Category::new("food");
    /// food.add_item("img/food/fries.png", "french fries");
    /// assert_eq!(food.select("img/food/fries.png"), "french fries");
    /// assert_eq!(food.select("img/food/unknown.png"), "");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: OrderedMap::new(),
        }
    }

    /// Display name of the category.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spoken text for `image_loc`, or `None` if it is not an item here.
    pub fn text_for(&self, image_loc: &str) -> Option<&str> {
        self.items.get(image_loc).ok().map(String::as_str)
    }

    /// Item image locations paired with their spoken text, in declaration order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(key, text)| (key, text.as_str()))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the category holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Page for Category {
    /// Spoken text, or the empty string when the key is not an item.
    type Selection = String;

    fn image_locs(&self) -> Vec<String> {
        self.items.keys().map(str::to_string).collect()
    }

    fn category_name(&self) -> &str {
        &self.name
    }

    fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    fn add_item(&mut self, image_loc: &str, text: &str) {
        if !is_valid_symbol(image_loc) {
            tracing::debug!(key = image_loc, category = %self.name, "dropping item with invalid key");
            return;
        }

        if let Err(err) = self.items.insert(image_loc, text.to_string()) {
            tracing::debug!(%err, category = %self.name, "dropping item");
        }
    }

    fn select(&mut self, image_loc: &str) -> String {
        self.text_for(image_loc).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_empty() {
        let category = Category::new("food");
        assert_eq!(category.name(), "food");
        assert_eq!(category.category_name(), "food");
        assert!(category.image_locs().is_empty());
        assert!(category.is_empty());
    }

    #[test]
    fn test_add_item_then_select() {
        let mut category = Category::new("food");
        category.add_item("img/food/fries.png", "french fries");

        assert!(category.has_image("img/food/fries.png"));
        assert_eq!(category.select("img/food/fries.png"), "french fries");
    }

    #[test]
    fn test_empty_text_is_a_valid_item() {
        let mut category = Category::new("misc");
        category.add_item("img/blank.png", "");

        assert!(category.has_image("img/blank.png"));
        assert_eq!(category.select("img/blank.png"), "");
        assert_eq!(category.len(), 1);
    }

    #[test]
    fn test_empty_key_is_dropped() {
        let mut category = Category::new("food");
        category.add_item("img/food/fries.png", "french fries");
        category.add_item("", "ghost");

        assert_eq!(category.image_locs(), vec!["img/food/fries.png"]);
        assert!(!category.has_image(""));
    }

    #[test]
    fn test_whitespace_key_is_dropped() {
        let mut category = Category::new("food");
        category.add_item("img/food/two words.png", "nope");
        assert!(category.is_empty());
    }

    #[test]
    fn test_select_missing_returns_empty_string() {
        let mut category = Category::new("food");
        category.add_item("img/food/fries.png", "french fries");
        assert_eq!(category.select("img/food/pizza.png"), "");
        assert_eq!(category.text_for("img/food/pizza.png"), None);
    }

    #[test]
    fn test_overwrite_item_keeps_order() {
        let mut category = Category::new("food");
        category.add_item("a.png", "apple");
        category.add_item("b.png", "banana");
        category.add_item("a.png", "avocado");

        assert_eq!(category.image_locs(), vec!["a.png", "b.png"]);
        assert_eq!(category.select("a.png"), "avocado");
    }

    #[test]
    fn test_items_iterates_in_order() {
        let mut category = Category::new("food");
        category.add_item("img/food/fries.png", "french fries");
        category.add_item("img/food/watermelon.png", "watermelon");

        let items: Vec<_> = category.items().collect();
        assert_eq!(
            items,
            vec![
                ("img/food/fries.png", "french fries"),
                ("img/food/watermelon.png", "watermelon"),
            ]
        );
    }
}
