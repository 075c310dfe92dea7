//! Tri-state slot for a fetched collection.

use crate::error::{FetchError, FetchResult};

/// Load state of one collection shown by the view.
///
/// Transitions are one-way: `Loading` moves to `Loaded` or `Failed` once and
/// stays there for the lifetime of the mounted view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Resource<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Resource::Loaded(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Resource::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Settle a `Loading` slot with a fetch outcome.
    ///
    /// Returns `false` and leaves the slot untouched if it already settled.
    pub fn settle(&mut self, result: FetchResult<T>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(data) => Resource::Loaded(data),
            Err(err) => Resource::Failed(err),
        };
        true
    }
}

impl<T> Resource<Vec<T>> {
    /// Records to list; empty unless loaded.
    pub fn entries(&self) -> &[T] {
        match self {
            Resource::Loaded(records) => records,
            _ => &[],
        }
    }
}
