//! View state decoupled from the application lifecycle.
//!
//! UI rendering is a pure function of [`CatalogView`]: the `ui` module reads
//! it and never touches the [`App`](crate::app::App) that owns it.
//!
//! - [`CatalogView`]: both lists, focus and highlighted rows
//! - [`Resource`]: `Loading | Loaded | Failed` slot per collection

mod catalog_view;
mod resource;

pub use catalog_view::{CatalogView, Focus};
pub use resource::Resource;
