//! The one-time fetch run when the view mounts.

use crate::config::FetchMode;
use crate::error::{FetchError, FetchResult};
use crate::models::{CatalogRecord, Category, Item};
use crate::traits::HttpClient;

use super::CatalogClient;

/// Outcome of both fetches, delivered to the view as a single update.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub categories: FetchResult<Vec<Category>>,
    pub items: FetchResult<Vec<Item>>,
}

impl CatalogSnapshot {
    pub fn is_complete(&self) -> bool {
        self.categories.is_ok() && self.items.is_ok()
    }
}

/// Fetch both collections in the given order.
///
/// In [`FetchMode::Sequential`] the items request is only issued once the
/// categories request has succeeded; otherwise items resolve to
/// [`FetchError::Skipped`].
pub async fn fetch_catalog<C: HttpClient>(
    client: &CatalogClient<C>,
    mode: FetchMode,
) -> CatalogSnapshot {
    tracing::debug!(%mode, base = client.base_url(), "Starting catalog fetch");
    match mode {
        FetchMode::Sequential => {
            let categories = client.fetch_categories().await;
            let items = match &categories {
                Ok(_) => client.fetch_items().await,
                Err(_) => Err(FetchError::Skipped {
                    resource: Item::RESOURCE,
                    after: Category::RESOURCE,
                }),
            };
            CatalogSnapshot { categories, items }
        }
        FetchMode::Parallel => {
            let (categories, items) = tokio::join!(client.fetch_categories(), client.fetch_items());
            CatalogSnapshot { categories, items }
        }
    }
}
