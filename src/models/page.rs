//! The capability shared by everything that can be shown as a page of symbols.

/// A page of selectable symbols.
///
/// Both a single [`Category`](crate::models::Category) and the whole
/// [`Board`](crate::models::Board) are pages: they list the symbols currently
/// visible and answer selections. What a selection yields differs, so the
/// outcome is an associated type.
pub trait Page {
    /// Outcome of selecting a symbol.
    type Selection;

    /// Image locations currently visible, in declaration order.
    fn image_locs(&self) -> Vec<String>;

    /// Display name of the category currently shown.
    fn category_name(&self) -> &str;

    /// Returns true if `image_loc` is one of the visible items.
    fn has_image(&self, image_loc: &str) -> bool;

    /// Adds (or overwrites) an item on the visible page.
    ///
    /// Invalid keys are dropped without error.
    fn add_item(&mut self, image_loc: &str, text: &str);

    /// Handles a selection of `image_loc`.
    fn select(&mut self, image_loc: &str) -> Self::Selection;
}
