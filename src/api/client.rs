//! # Backend Client
//!
//! [`JobBackend`] is the seam between the UI controller and the network.
//! [`HttpJobBackend`] talks JSON over HTTP with `reqwest`; tests substitute
//! their own implementation or point the HTTP client at a local server.

use super::error::{ApiError, Operation};
use super::types::{HealthStatus, SearchRequest, SearchResponse, SummaryRequest, SummaryResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Operations the client needs from the job search backend.
#[async_trait]
pub trait JobBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;

    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// HTTP implementation of [`JobBackend`].
#[derive(Debug, Clone)]
pub struct HttpJobBackend {
    http: Client,
    base_url: String,
}

impl HttpJobBackend {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    async fn post_json<B, R>(&self, operation: Operation, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(operation);
        tracing::debug!(%url, "sending request");
        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(operation, response).await
    }

    async fn decode<R: DeserializeOwned>(
        operation: Operation,
        response: reqwest::Response,
    ) -> Result<R, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path = operation.path(), "request failed");
            return Err(ApiError::from_status(operation, status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl JobBackend for HttpJobBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        self.post_json(Operation::Search, request).await
    }

    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, ApiError> {
        self.post_json(Operation::Summarize, request).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.url(Operation::Health);
        let response = self.http.get(&url).send().await?;
        Self::decode(Operation::Health, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let backend = HttpJobBackend::new("http://localhost:8000/");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(
            backend.url(Operation::Search),
            "http://localhost:8000/api/search"
        );
        assert_eq!(
            backend.url(Operation::Summarize),
            "http://localhost:8000/api/summarize"
        );
    }

    #[test]
    fn test_with_timeout_builds() {
        let backend =
            HttpJobBackend::with_timeout("http://localhost:8000", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.url(Operation::Health), "http://localhost:8000/api/health");
    }
}
