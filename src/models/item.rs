use serde::Deserialize;

use super::EntityId;

/// A catalog item as returned by `GET /items/`.
///
/// The server nests the full category, author and rating data in each item;
/// only `id` and `title` are read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Item {
    pub id: EntityId,
    pub title: String,
}

impl Item {
    pub fn new(id: impl Into<EntityId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_shape() {
        let json = r#"{
            "id": 10,
            "title": "Cola",
            "description": "Fizzy",
            "category": {"id": 1, "name": "Drinks", "description": ""},
            "tags": ["sweet"],
            "rating": 4.5,
            "number_of_ratings": 12
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item, Item::new(10, "Cola"));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let err = serde_json::from_str::<Item>(r#"{"id": 10, "name": "Cola"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = serde_json::from_str::<Item>(r#"{"title": "Cola"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }
}
