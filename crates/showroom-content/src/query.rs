//! Object query builder.

use serde_json::{Map, Value};

/// A find query against one object type.
///
/// Filters are equality matches on top-level fields (`slug`, `id`) or on
/// dotted metadata paths (`metadata.brand`). For a relation field the
/// value is the related object's id.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectQuery {
    object_type: String,
    filters: Map<String, Value>,
    props: Vec<String>,
    depth: Option<u8>,
    limit: Option<u32>,
}

impl ObjectQuery {
    /// Query objects of the given type (e.g. `cars`).
    pub fn of_type(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            filters: Map::new(),
            props: Vec::new(),
            depth: None,
            limit: None,
        }
    }

    /// Match a single slug.
    pub fn slug(self, slug: impl Into<String>) -> Self {
        self.filter("slug", slug.into())
    }

    /// Add an equality filter.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Restrict the returned fields.
    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Inline related objects this many levels deep.
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Cap the number of returned objects.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Object type being queried.
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Equality filters, excluding the type.
    pub fn filters(&self) -> &Map<String, Value> {
        &self.filters
    }

    /// Requested fields; empty means all.
    pub fn requested_props(&self) -> &[String] {
        &self.props
    }

    /// Relation depth, if set.
    pub fn depth_level(&self) -> Option<u8> {
        self.depth
    }

    /// Result cap, if set.
    pub fn max_results(&self) -> Option<u32> {
        self.limit
    }

    /// The `query` parameter: filters plus `type`, as a JSON object.
    pub fn query_json(&self) -> Value {
        let mut query = self.filters.clone();
        query.insert("type".to_string(), Value::String(self.object_type.clone()));
        Value::Object(query)
    }

    /// URL parameters other than the read key, already percent-encoded.
    pub fn encoded_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![(
            "query",
            urlencoding::encode(&self.query_json().to_string()).into_owned(),
        )];
        if !self.props.is_empty() {
            params.push(("props", urlencoding::encode(&self.props.join(",")).into_owned()));
        }
        if let Some(depth) = self.depth {
            params.push(("depth", depth.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}
