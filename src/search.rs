//! Web search client (Serper / Google Search).

use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

/// A single search: query text plus the country (`gl`) to localize results for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub q: String,
    pub gl: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            q: query.into(),
            gl: country.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

/// The parts of a search reply the pipeline reads. Everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
    #[serde(default, rename = "peopleAlsoAsk")]
    pub people_also_ask: Vec<RelatedQuestion>,
}

#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError>;
}

pub struct SerperClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl SerperClient {
    /// The API key is optional here; a missing key is reported by [`SearchClient::search`]
    /// before any request is made.
    pub fn new(
        api_key: Option<String>,
        endpoint: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_SERPER_ENDPOINT.to_string()),
        })
    }
}

#[async_trait]
impl SearchClient for SerperClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ApiError::ConfigError("SERPER_API_KEY is not set; search is unavailable".to_string())
        })?;

        info!(query = %query.q, country = %query.gl, "Serper search");

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", api_key)
            .header("Content-Type", "application/json")
            .json(query)
            .send()
            .await
            .map_err(|e| ApiError::SearchRequestFailed(format!("Serper API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::SearchRequestFailed(format!(
                "Serper returned {}: {}",
                status,
                body.trim()
            )));
        }

        let data: SearchResponse = response.json().await.map_err(|e| {
            ApiError::SearchRequestFailed(format!("Failed to parse Serper response: {}", e))
        })?;

        info!(
            query = %query.q,
            organic = data.organic.len(),
            questions = data.people_also_ask.len(),
            "Serper search complete"
        );
        Ok(data)
    }
}
