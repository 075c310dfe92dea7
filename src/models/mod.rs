//! Records decoded from the catalog API.
//!
//! Both record kinds are read-only pass-throughs: the client decodes and
//! displays them but never mutates, merges, or reorders them.

mod category;
mod id;
mod item;

pub use category::Category;
pub use id::EntityId;
pub use item::Item;

use serde::de::DeserializeOwned;

/// A record type served as a collection at `{base}/{RESOURCE}/`.
pub trait CatalogRecord: DeserializeOwned + Send + 'static {
    /// Path segment of the collection endpoint.
    const RESOURCE: &'static str;

    /// Text shown for this record in a list.
    fn label(&self) -> &str;
}

impl CatalogRecord for Category {
    const RESOURCE: &'static str = "categories";

    fn label(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for Item {
    const RESOURCE: &'static str = "items";

    fn label(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::new(1, "Drinks").label(), "Drinks");
        assert_eq!(Item::new(10, "Cola").label(), "Cola");
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(Category::RESOURCE, "categories");
        assert_eq!(Item::RESOURCE, "items");
    }
}
