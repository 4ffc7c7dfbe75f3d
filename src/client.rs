//! HTTP client for the player-search service
//!
//! One GET per call, bounded by the configured timeout, no retries.
//! Every failure is classified into a [`RequestError`].

use std::time::Duration;
use log::{debug, info};
use reqwest::{Client as HttpClient, Url};
use serde_json::Value as JsonValue;

use crate::core::errors::{RequestError, Result};
use crate::core::normalize::search_result_from_json;
use crate::core::query::{Endpoint, SearchQuery};
use crate::core::record::SearchResult;

/// Default base URL of the service
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, with or without trailing slash
    pub base_url: String,
    /// Upper bound for the whole request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Successful answer of `/api/search`
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Normalized result
    pub result: SearchResult,
    /// Body exactly as received, for raw output
    pub body: String,
}

/// Client for the player-search service
pub struct PlayerSearchClient {
    config: ClientConfig,
    http_client: HttpClient,
}

impl PlayerSearchClient {
    /// Create a client with the given configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("player-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RequestError::Transport)?;

        Ok(PlayerSearchClient {
            config,
            http_client,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL requested for an endpoint and query
    pub fn request_url(&self, endpoint: Endpoint, query: &SearchQuery) -> Result<Url> {
        let base = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        );

        Url::parse_with_params(&base, query.params())
            .map_err(|e| RequestError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))
    }

    async fn fetch_text(&self, endpoint: Endpoint, query: &SearchQuery) -> Result<String> {
        let url = self.request_url(endpoint, query)?;
        let timeout = self.config.timeout;
        info!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| RequestError::classify(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RequestError::classify(e, timeout))?;

        debug!("{} answered {} bytes", endpoint, body.len());
        Ok(body)
    }

    /// Search players, decoding the JSON answer
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let body = self.fetch_text(Endpoint::Search, query).await?;

        let json: JsonValue = serde_json::from_str(&body)
            .map_err(|e| RequestError::MalformedPayload(e.to_string()))?;

        let result = search_result_from_json(&json).ok_or_else(|| {
            RequestError::MalformedPayload("expected a JSON object at the top level".to_string())
        })?;

        Ok(SearchResponse { result, body })
    }

    /// Export players as CSV text, returned untouched
    pub async fn export(&self, query: &SearchQuery) -> Result<String> {
        self.fetch_text(Endpoint::Export, query).await
    }
}
