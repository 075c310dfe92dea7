//! AppMessage enum for async communication within the application.

use crate::catalog::CatalogSnapshot;

/// Messages sent from background tasks to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The mount-time fetch sequence finished, successfully or not
    CatalogLoaded(CatalogSnapshot),
}
