//! View state of the catalog screen.

use crate::catalog::CatalogSnapshot;
use crate::models::{CatalogRecord, Category, Item};

use super::Resource;

/// Which list receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Categories,
    Items,
}

/// Everything the catalog screen renders.
///
/// Rendering reads this struct only; nothing in it is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub categories: Resource<Vec<Category>>,
    pub items: Resource<Vec<Item>>,
    pub focus: Focus,
    /// Highlighted row per list
    pub category_cursor: usize,
    pub item_cursor: usize,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of the fetch sequence in one update.
    ///
    /// Returns `true` if either slot changed.
    pub fn apply(&mut self, snapshot: CatalogSnapshot) -> bool {
        let categories_changed = self.categories.settle(snapshot.categories);
        let items_changed = self.items.settle(snapshot.items);
        categories_changed || items_changed
    }

    /// `true` once neither list is still loading.
    pub fn is_settled(&self) -> bool {
        !self.categories.is_loading() && !self.items.is_loading()
    }

    /// `true` if either list failed to load.
    pub fn has_failures(&self) -> bool {
        self.categories.error().is_some() || self.items.error().is_some()
    }

    pub fn category_labels(&self) -> Vec<&str> {
        labels(self.categories.entries())
    }

    pub fn item_labels(&self) -> Vec<&str> {
        labels(self.items.entries())
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Categories => Focus::Items,
            Focus::Items => Focus::Categories,
        };
    }

    pub fn select_next(&mut self) {
        let (cursor, len) = self.focused_cursor();
        if len > 0 && *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        let (cursor, _) = self.focused_cursor();
        *cursor = cursor.saturating_sub(1);
    }

    /// Highlighted row of a list, `None` while it has no entries.
    pub fn selected(&self, focus: Focus) -> Option<usize> {
        let (cursor, len) = match focus {
            Focus::Categories => (self.category_cursor, self.categories.entries().len()),
            Focus::Items => (self.item_cursor, self.items.entries().len()),
        };
        (len > 0).then(|| cursor.min(len - 1))
    }

    fn focused_cursor(&mut self) -> (&mut usize, usize) {
        match self.focus {
            Focus::Categories => (&mut self.category_cursor, self.categories.entries().len()),
            Focus::Items => (&mut self.item_cursor, self.items.entries().len()),
        }
    }
}

fn labels<T: CatalogRecord>(records: &[T]) -> Vec<&str> {
    records.iter().map(T::label).collect()
}
