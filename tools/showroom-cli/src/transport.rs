//! Content transport over `reqwest`.

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use showroom_content::{ContentError, HttpResponse, Transport};

/// GET requests through a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("showroom-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ContentError> {
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::Transport(e.without_url().to_string()))?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
