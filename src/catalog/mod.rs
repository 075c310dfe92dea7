//! Catalog API access.
//!
//! - [`CatalogClient`] - one resource client per collection endpoint
//! - [`fetch_catalog`] - the fetch sequence run once when the view mounts

mod client;
mod sequence;

pub use client::CatalogClient;
pub use sequence::{fetch_catalog, CatalogSnapshot};
