//! HTTP client for the film finance modeling backend.
//!
//! One request per invocation, no retry, no client-side timeout. The
//! response body is decoded in a single typed step; a shape mismatch is a
//! distinct [`ClientError::Malformed`] rather than a silent pass-through.

mod error;

pub use error::ClientError;

use filmsim_core::report::ModelReport;
use filmsim_core::request::ModelRequest;
use filmsim_core::search::{SearchRequest, SearchResponse};
use tracing::{debug, warn};

/// Backend connection settings, built once at startup and passed down
/// explicitly. There is no compiled-in default for either value.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Static key forwarded as the `x-api-key` header.
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }
}

/// Client for the `/models` and `/search` endpoints.
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ModelClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Runs the financial model once and decodes the full report.
    pub async fn run_model(&self, request: &ModelRequest) -> Result<ModelReport, ClientError> {
        let url = format!("{}/models", self.config.base_url);
        debug!(%url, "submitting model run");
        self.post_json(&url, request).await
    }

    /// Looks up comparable titles for a free-text query.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let url = format!("{}/search", self.config.base_url);
        debug!(%url, query = %request.query, "submitting search");
        self.post_json(&url, request).await
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, ClientError>
    where
        B: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header("x-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, %status, "backend rejected request");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Read the body first so a decode failure can be told apart from
        // a transport failure.
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(ClientError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_strips_trailing_slashes() {
        let config = ClientConfig::new("http://localhost:8000/", "k");
        assert_eq!(config.base_url, "http://localhost:8000");

        let config = ClientConfig::new("http://localhost:8000", "k");
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
