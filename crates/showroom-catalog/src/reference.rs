//! Relations between content objects.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::record::Object;

/// A relation field: a bare id, or the related object inlined when the
/// query asked for depth ≥ 1.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<T> {
    Id(String),
    Expanded(Box<Object<T>>),
}

impl<T: DeserializeOwned> Reference<T> {
    /// Decode either shape. An inlined object that does not decode but
    /// still carries an id degrades to `Id`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(id) if !id.trim().is_empty() => Some(Self::Id(id.trim().to_string())),
            Value::Object(map) => {
                let id = map
                    .get("id")
                    .and_then(Value::as_str)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)?;
                match serde_json::from_value::<Object<T>>(Value::Object(map)) {
                    Ok(object) => Some(Self::Expanded(Box::new(object))),
                    Err(_) => Some(Self::Id(id)),
                }
            }
            _ => None,
        }
    }
}

impl<T> Reference<T> {
    /// Id of the related object.
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Expanded(object) => &object.id,
        }
    }

    /// The related object, when inlined.
    pub fn expanded(&self) -> Option<&Object<T>> {
        match self {
            Reference::Id(_) => None,
            Reference::Expanded(object) => Some(object),
        }
    }

    /// The related object, inlined or looked up by id in `pool`.
    pub fn resolve_in<'a>(&'a self, pool: &'a [Object<T>]) -> Option<&'a Object<T>> {
        self.expanded()
            .or_else(|| pool.iter().find(|object| object.id == self.id()))
    }

    /// Whether this points at the object with `id`.
    pub fn points_to(&self, id: &str) -> bool {
        self.id() == id
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Reference<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Reference::from_value(value)
            .ok_or_else(|| D::Error::custom("reference must be an id or an object with an id"))
    }
}

/// Null, blank or malformed relations are absent.
pub(crate) fn optional_reference<'de, D, T>(deserializer: D) -> Result<Option<Reference<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Reference::from_value(Value::deserialize(deserializer)?))
}

/// Malformed entries are dropped; order is kept.
pub(crate) fn reference_list<'de, D, T>(deserializer: D) -> Result<Vec<Reference<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(Reference::from_value).collect(),
        single @ (Value::String(_) | Value::Object(_)) => {
            Reference::from_value(single).into_iter().collect()
        }
        _ => Vec::new(),
    })
}
