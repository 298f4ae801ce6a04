//! HTTP transport seam.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ContentError;

/// A received HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ContentError> {
        serde_json::from_slice(&self.body).map_err(ContentError::from)
    }

    /// Map the status to an error: 404 is `NotFound`, other non-2xx
    /// statuses are `Http`.
    pub fn error_for_status(self, url: &str) -> Result<Self, ContentError> {
        match self.status {
            200..=299 => Ok(self),
            404 => Err(ContentError::NotFound),
            status => Err(ContentError::Http {
                status,
                url: url.to_string(),
            }),
        }
    }
}

/// Sends GET requests. Implemented over Spin outbound HTTP in the
/// workload and over `reqwest` in the CLI.
#[async_trait(?Send)]
pub trait Transport {
    /// Send a GET request.
    async fn get(&self, url: &str) -> Result<HttpResponse, ContentError>;
}

/// Outbound HTTP through the Spin host.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ContentError> {
        let request = spin_sdk::http::Request::get(url).build();
        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        Ok(HttpResponse::new(*response.status(), response.body().to_vec()))
    }
}
