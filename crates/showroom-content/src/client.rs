//! Content API trait and the Cosmic implementation.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use showroom_core::ContentSettings;

use crate::error::ContentError;
use crate::query::ObjectQuery;
use crate::transport::Transport;

/// One page of raw objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectPage {
    /// Matching objects, undecoded.
    #[serde(default)]
    pub objects: Vec<Value>,
    /// Total matches upstream, when reported.
    #[serde(default)]
    pub total: Option<u64>,
}

/// Read access to the content store.
///
/// Returns raw JSON; typing and validation happen in the catalog layer.
#[async_trait(?Send)]
pub trait ContentApi {
    /// Find all objects matching the query.
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, ContentError>;

    /// Find the first object matching the query, or `NotFound`.
    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, ContentError> {
        let page = self.find(&query.clone().limit(1)).await?;
        page.objects
            .into_iter()
            .next()
            .ok_or(ContentError::NotFound)
    }
}

/// Client for the Cosmic REST API.
///
/// Holds only fixed configuration; one instance serves a whole process.
pub struct CosmicClient<T> {
    base_url: String,
    bucket_slug: String,
    read_key: String,
    transport: T,
}

impl<T: Transport> CosmicClient<T> {
    /// Create a client from content settings and a transport.
    pub fn new(settings: &ContentSettings, transport: T) -> Self {
        Self {
            base_url: settings.base_url().to_string(),
            bucket_slug: settings.bucket_slug.clone(),
            read_key: settings.read_key.clone(),
            transport,
        }
    }

    /// Objects endpoint for this bucket, without parameters.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v3/buckets/{}/objects",
            self.base_url,
            urlencoding::encode(&self.bucket_slug)
        )
    }

    /// Full request URL including the read key.
    pub fn objects_url(&self, query: &ObjectQuery) -> String {
        let mut url = format!(
            "{}?read_key={}",
            self.endpoint(),
            urlencoding::encode(&self.read_key)
        );
        for (key, value) in query.encoded_params() {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&value);
        }
        url
    }
}

#[async_trait(?Send)]
impl<T: Transport> ContentApi for CosmicClient<T> {
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, ContentError> {
        let url = self.objects_url(query);
        // Errors carry the endpoint, never the read key.
        let response = self
            .transport
            .get(&url)
            .await?
            .error_for_status(&self.endpoint())?;

        let body: Value = response.json()?;
        if body.get("objects").map_or(true, Value::is_null) {
            return Ok(ObjectPage::default());
        }
        serde_json::from_value(body).map_err(ContentError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde_json::json;

    use super::*;
    use crate::transport::HttpResponse;

    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ContentError>>>,
        requested: RefCell<Vec<String>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<Result<HttpResponse, ContentError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for &ScriptedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, ContentError> {
            self.requested.borrow_mut().push(url.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ContentError::Transport("no scripted response".into())))
        }
    }

    fn settings() -> ContentSettings {
        ContentSettings {
            bucket_slug: "elite-cars".to_string(),
            read_key: "rk 1".to_string(),
            ..Default::default()
        }
    }

    fn ok(body: Value) -> Result<HttpResponse, ContentError> {
        Ok(HttpResponse::new(200, body.to_string()))
    }

    // === URL Tests ===

    #[test]
    fn test_objects_url() {
        let transport = ScriptedTransport::new(vec![]);
        let client = CosmicClient::new(&settings(), &transport);
        let url = client.objects_url(&ObjectQuery::of_type("cars").depth(1));

        assert!(url.starts_with(
            "https://api.cosmic-staging.com/v3/buckets/elite-cars/objects?read_key=rk%201&query="
        ));
        assert!(url.ends_with("&depth=1"));
    }

    // === Find Tests ===

    #[tokio::test]
    async fn test_find_decodes_objects() {
        let transport = ScriptedTransport::new(vec![ok(json!({
            "objects": [{"id": "1", "slug": "a"}, {"id": "2", "slug": "b"}],
            "total": 2
        }))]);
        let client = CosmicClient::new(&settings(), &transport);

        let page = client.find(&ObjectQuery::of_type("cars")).await.unwrap();
        assert_eq!(page.objects.len(), 2);
        assert_eq!(page.total, Some(2));
        assert_eq!(transport.requested.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_find_404_is_not_found() {
        let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(
            404,
            r#"{"message":"No objects found"}"#,
        ))]);
        let client = CosmicClient::new(&settings(), &transport);

        let err = client.find(&ObjectQuery::of_type("cars")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_server_error_hides_read_key() {
        let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(500, "oops"))]);
        let client = CosmicClient::new(&settings(), &transport);

        match client.find(&ObjectQuery::of_type("cars")).await.unwrap_err() {
            ContentError::Http { status, url } => {
                assert_eq!(status, 500);
                assert!(!url.contains("read_key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_missing_objects_is_empty() {
        let transport = ScriptedTransport::new(vec![ok(json!({"total": 0}))]);
        let client = CosmicClient::new(&settings(), &transport);

        let page = client.find(&ObjectQuery::of_type("brands")).await.unwrap();
        assert!(page.objects.is_empty());
    }

    #[tokio::test]
    async fn test_find_malformed_body() {
        let transport = ScriptedTransport::new(vec![ok(json!({"objects": "nope"}))]);
        let client = CosmicClient::new(&settings(), &transport);

        let err = client.find(&ObjectQuery::of_type("brands")).await.unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
    }

    // === Find One Tests ===

    #[tokio::test]
    async fn test_find_one_takes_first_with_limit() {
        let transport = ScriptedTransport::new(vec![ok(json!({"objects": [{"id": "9"}]}))]);
        let client = CosmicClient::new(&settings(), &transport);

        let object = client
            .find_one(&ObjectQuery::of_type("cars").slug("f40"))
            .await
            .unwrap();
        assert_eq!(object["id"], "9");
        assert!(transport.requested.borrow()[0].ends_with("&limit=1"));
    }

    #[tokio::test]
    async fn test_find_one_empty_is_not_found() {
        let transport = ScriptedTransport::new(vec![ok(json!({"objects": []}))]);
        let client = CosmicClient::new(&settings(), &transport);

        let err = client
            .find_one(&ObjectQuery::of_type("cars").slug("f40"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
