use serde::Deserialize;

use super::EntityId;

/// A catalog category as returned by `GET /categories/`.
///
/// Fields beyond `id` and `name` (such as `description`) are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
