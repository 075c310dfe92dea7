use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Identifier of a catalog record.
///
/// The API uses integer primary keys; string keys (UUIDs) are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Int(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

struct EntityIdVisitor;

impl<'de> Visitor<'de> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<EntityId, E>
    where
        E: de::Error,
    {
        Ok(EntityId::Text(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<EntityId, E>
    where
        E: de::Error,
    {
        Ok(EntityId::Text(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<EntityId, E>
    where
        E: de::Error,
    {
        Ok(EntityId::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<EntityId, E>
    where
        E: de::Error,
    {
        i64::try_from(value)
            .map(EntityId::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_id() {
        let id: EntityId = serde_json::from_str("42").unwrap();
        assert_eq!(id, EntityId::Int(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_string_id() {
        let id: EntityId = serde_json::from_str(r#""7f1c-aa""#).unwrap();
        assert_eq!(id, EntityId::from("7f1c-aa"));
        assert_eq!(id.to_string(), "7f1c-aa");
    }

    #[test]
    fn test_rejects_other_types() {
        for raw in ["true", "1.5", "null", "[1]", "{}"] {
            let err = serde_json::from_str::<EntityId>(raw).unwrap_err();
            assert!(
                err.to_string().contains("a string or integer"),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn test_rejects_u64_overflow() {
        assert!(serde_json::from_str::<EntityId>("18446744073709551615").is_err());
    }
}
