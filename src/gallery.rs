//! Gallery filtering and grid state
//!
//! The pure filter derivation lives here next to the view state that feeds
//! it: the selected category, the grid cursor, the page scroll offset, and
//! the lightbox controller.

use crate::catalog::{Catalog, GalleryItem, ALL_CATEGORY};
use crate::lightbox::LightboxController;

/// Derive the filtered, order-preserving view of the catalog.
///
/// "All" returns the catalog unchanged; any other known category returns the
/// matching subsequence. Unknown categories are normalized to "All" before
/// this is called, so they behave identically.
pub fn filter<'a>(catalog: &'a Catalog, selected: &str) -> Vec<&'a GalleryItem> {
    if selected == ALL_CATEGORY {
        catalog.items.iter().collect()
    } else {
        catalog
            .items
            .iter()
            .filter(|item| item.category == selected)
            .collect()
    }
}

/// Clamp a requested category to the derived category set.
///
/// Anything outside the set collapses to "All" (defensive default).
pub fn normalize_category(catalog: &Catalog, requested: &str) -> String {
    if catalog.categories().iter().any(|c| c == requested) {
        requested.to_string()
    } else {
        ALL_CATEGORY.to_string()
    }
}

/// Interaction state for the gallery view.
#[derive(Debug)]
pub struct GalleryView {
    /// Currently selected category; mutated only by explicit selection.
    selected: String,
    /// Index into the filtered item list.
    cursor: usize,
    /// Page scroll offset in rows.
    pub scroll: u16,
    pub lightbox: LightboxController,
}

impl GalleryView {
    pub fn new() -> Self {
        Self {
            selected: ALL_CATEGORY.to_string(),
            cursor: 0,
            scroll: 0,
            lightbox: LightboxController::new(),
        }
    }

    pub fn selected_category(&self) -> &str {
        &self.selected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Select a category by name, normalizing unknown names to "All". The
    /// cursor resets because the filtered view changed shape.
    pub fn select_category(&mut self, catalog: &Catalog, requested: &str) {
        let normalized = normalize_category(catalog, requested);
        if normalized != self.selected {
            tracing::debug!(category = %normalized, "gallery filter changed");
            self.selected = normalized;
            self.cursor = 0;
        }
    }

    /// Select a category by its index in the derived category list.
    pub fn select_category_index(&mut self, catalog: &Catalog, index: usize) {
        let categories = catalog.categories();
        if let Some(category) = categories.get(index) {
            let category = category.clone();
            self.select_category(catalog, &category);
        }
    }

    /// Step to the next/previous category, wrapping around.
    pub fn cycle_category(&mut self, catalog: &Catalog, forward: bool) {
        let categories = catalog.categories();
        if categories.is_empty() {
            return;
        }
        let current = categories
            .iter()
            .position(|c| *c == self.selected)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % categories.len()
        } else {
            (current + categories.len() - 1) % categories.len()
        };
        let category = categories[next].clone();
        self.select_category(catalog, &category);
    }

    /// The filtered items for the current selection.
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a GalleryItem> {
        filter(catalog, &self.selected)
    }

    /// Move the grid cursor, clamping to the filtered range.
    pub fn move_cursor(&mut self, catalog: &Catalog, delta: isize) {
        let len = self.filtered(catalog).len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let cursor = self.cursor.min(len - 1) as isize + delta;
        self.cursor = cursor.clamp(0, len as isize - 1) as usize;
    }

    /// Open the lightbox on the item under the cursor.
    pub fn open_selected(&mut self, catalog: &Catalog) {
        let items = self.filtered(catalog);
        if let Some(item) = items.get(self.cursor.min(items.len().saturating_sub(1))) {
            self.lightbox.select((*item).clone());
        }
    }

    /// Open the lightbox on a specific item id (mouse path).
    pub fn open_item(&mut self, catalog: &Catalog, id: u32) {
        if let Some(item) = catalog.get(id) {
            if let Some(pos) = self.filtered(catalog).iter().position(|i| i.id == id) {
                self.cursor = pos;
            }
            self.lightbox.select(item.clone());
        }
    }

    /// Switch the open preview to the neighbouring filtered item, without
    /// passing through Closed.
    pub fn switch_preview(&mut self, catalog: &Catalog, forward: bool) {
        if !self.lightbox.is_open() {
            return;
        }
        let items = self.filtered(catalog);
        if items.is_empty() {
            return;
        }
        let len = items.len();
        let next = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
        self.cursor = next;
        self.lightbox.select(items[next].clone());
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GalleryItem;

    fn catalog() -> Catalog {
        Catalog {
            items: vec![
                GalleryItem {
                    id: 1,
                    category: "Logo".to_string(),
                    title: "Tech Start-Up".to_string(),
                    image: String::new(),
                },
                GalleryItem {
                    id: 2,
                    category: "Poster".to_string(),
                    title: "Music Festival".to_string(),
                    image: String::new(),
                },
                GalleryItem {
                    id: 3,
                    category: "Logo".to_string(),
                    title: "Coffee Brand".to_string(),
                    image: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let catalog = catalog();
        let all = filter(&catalog, ALL_CATEGORY);
        let ids: Vec<u32> = all.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = catalog();
        let logos = filter(&catalog, "Logo");
        let ids: Vec<u32> = logos.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(logos.iter().all(|i| i.category == "Logo"));
    }

    #[test]
    fn test_unknown_category_normalizes_to_all() {
        let catalog = catalog();
        assert_eq!(normalize_category(&catalog, "Sculpture"), ALL_CATEGORY);
        assert_eq!(normalize_category(&catalog, "Poster"), "Poster");

        let mut view = GalleryView::new();
        view.select_category(&catalog, "Sculpture");
        assert_eq!(view.selected_category(), ALL_CATEGORY);
        assert_eq!(view.filtered(&catalog).len(), 3);
    }

    #[test]
    fn test_select_category_resets_cursor() {
        let catalog = catalog();
        let mut view = GalleryView::new();
        view.move_cursor(&catalog, 2);
        assert_eq!(view.cursor(), 2);

        view.select_category(&catalog, "Logo");
        assert_eq!(view.cursor(), 0);

        // Re-selecting the same category keeps the cursor
        view.move_cursor(&catalog, 1);
        view.select_category(&catalog, "Logo");
        assert_eq!(view.cursor(), 1);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let catalog = catalog();
        let mut view = GalleryView::new();
        view.cycle_category(&catalog, true);
        assert_eq!(view.selected_category(), "Logo");
        view.cycle_category(&catalog, true);
        assert_eq!(view.selected_category(), "Poster");
        view.cycle_category(&catalog, true);
        assert_eq!(view.selected_category(), ALL_CATEGORY);
        view.cycle_category(&catalog, false);
        assert_eq!(view.selected_category(), "Poster");
    }

    #[test]
    fn test_cursor_clamps_to_filtered_range() {
        let catalog = catalog();
        let mut view = GalleryView::new();
        view.move_cursor(&catalog, 10);
        assert_eq!(view.cursor(), 2);
        view.move_cursor(&catalog, -10);
        assert_eq!(view.cursor(), 0);

        view.select_category(&catalog, "Logo");
        view.move_cursor(&catalog, 5);
        assert_eq!(view.cursor(), 1);
    }

    #[test]
    fn test_open_selected_and_switch_preview() {
        let catalog = catalog();
        let mut view = GalleryView::new();
        view.select_category(&catalog, "Logo");
        view.open_selected(&catalog);
        assert_eq!(view.lightbox.current().map(|i| i.id), Some(1));

        view.switch_preview(&catalog, true);
        assert_eq!(view.lightbox.current().map(|i| i.id), Some(3));
        assert!(view.lightbox.scroll_locked());

        view.switch_preview(&catalog, true);
        assert_eq!(view.lightbox.current().map(|i| i.id), Some(1));

        view.lightbox.dismiss();
        assert!(!view.lightbox.scroll_locked());
    }

    #[test]
    fn test_open_item_by_id_syncs_cursor() {
        let catalog = catalog();
        let mut view = GalleryView::new();
        view.open_item(&catalog, 3);
        assert_eq!(view.cursor(), 2);
        assert_eq!(view.lightbox.current().map(|i| i.id), Some(3));

        view.open_item(&catalog, 99);
        // Unknown id leaves the open preview untouched
        assert_eq!(view.lightbox.current().map(|i| i.id), Some(3));
    }
}
