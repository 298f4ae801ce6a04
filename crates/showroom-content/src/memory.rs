//! In-process content store.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::client::{ContentApi, ObjectPage};
use crate::error::ContentError;
use crate::query::ObjectQuery;

/// Content store over a fixed set of objects.
///
/// Answers queries the way the Cosmic API does: equality filters on
/// top-level or dotted metadata paths, relation ids inlined at depth 1,
/// field projection, and `NotFound` when nothing matches.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    objects: Vec<Value>,
    failing: Vec<String>,
}

impl MemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one object.
    pub fn with_object(mut self, object: Value) -> Self {
        self.objects.push(object);
        self
    }

    /// Add several objects.
    pub fn with_objects(mut self, objects: impl IntoIterator<Item = Value>) -> Self {
        self.objects.extend(objects);
        self
    }

    /// Make every query for `object_type` fail with HTTP 500.
    pub fn failing(mut self, object_type: impl Into<String>) -> Self {
        self.failing.push(object_type.into());
        self
    }

    /// Load from a fixture: `{"objects": [..]}` or a bare array.
    pub fn from_json(fixture: Value) -> Result<Self, ContentError> {
        let objects = match fixture {
            Value::Array(objects) => objects,
            Value::Object(mut map) => match map.remove("objects") {
                Some(Value::Array(objects)) => objects,
                _ => {
                    return Err(ContentError::Decode(
                        "fixture must contain an `objects` array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(ContentError::Decode(
                    "fixture must be an array or an object".to_string(),
                ))
            }
        };
        Ok(Self::new().with_objects(objects))
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn lookup(&self, id: &str) -> Option<&Value> {
        self.objects
            .iter()
            .find(|o| o.get("id").and_then(Value::as_str) == Some(id))
    }

    fn expand(&self, object: &mut Value) {
        let Some(Value::Object(metadata)) = object.get_mut("metadata") else {
            return;
        };
        for value in metadata.values_mut() {
            match value {
                Value::String(id) => {
                    if let Some(related) = self.lookup(id) {
                        *value = related.clone();
                    }
                }
                Value::Array(items) => {
                    for item in items.iter_mut() {
                        if let Some(related) = item.as_str().and_then(|id| self.lookup(id)) {
                            *item = related.clone();
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn field<'a>(object: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(object, |value, key| value.get(key))
}

fn matches(actual: &Value, expected: &Value) -> bool {
    if actual == expected {
        return true;
    }
    match actual {
        Value::Array(items) => items.iter().any(|item| matches(item, expected)),
        Value::Object(map) => map.get("id").is_some_and(|id| id == expected),
        _ => false,
    }
}

fn project(object: Value, props: &[String]) -> Value {
    if props.is_empty() {
        return object;
    }
    let Value::Object(map) = object else {
        return object;
    };
    let keep: Vec<&str> = props
        .iter()
        .map(|p| p.split('.').next().unwrap_or(p))
        .collect();
    let projected: Map<String, Value> = map
        .into_iter()
        .filter(|(key, _)| keep.contains(&key.as_str()))
        .collect();
    Value::Object(projected)
}

#[async_trait(?Send)]
impl ContentApi for MemoryContentStore {
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, ContentError> {
        if self.failing.iter().any(|t| t == query.object_type()) {
            return Err(ContentError::Http {
                status: 500,
                url: format!("memory://{}", query.object_type()),
            });
        }

        let mut objects: Vec<Value> = self
            .objects
            .iter()
            .filter(|o| o.get("type").and_then(Value::as_str) == Some(query.object_type()))
            .filter(|o| {
                query
                    .filters()
                    .iter()
                    .all(|(path, expected)| field(o, path).is_some_and(|a| matches(a, expected)))
            })
            .cloned()
            .collect();

        if objects.is_empty() {
            return Err(ContentError::NotFound);
        }

        let total = objects.len() as u64;
        if let Some(limit) = query.max_results() {
            objects.truncate(limit as usize);
        }
        if query.depth_level().unwrap_or(0) >= 1 {
            for object in objects.iter_mut() {
                self.expand(object);
            }
        }
        let objects = objects
            .into_iter()
            .map(|o| project(o, query.requested_props()))
            .collect();

        Ok(ObjectPage {
            objects,
            total: Some(total),
        })
    }
}
