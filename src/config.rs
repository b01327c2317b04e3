//! Configuration System
//!
//! Layered configuration for the completion service, search service, bulk scheduler,
//! research context and logging. Sources are merged in order: built-in defaults, the
//! global config file, workspace config files, then environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::provider::{CompletionOptions, ModelProvider};
use crate::search::DEFAULT_SERPER_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod loader;
mod merge;
mod sources;

pub use loader::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub completion: CompletionConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub bulk: BulkConfig,

    #[serde(default)]
    pub research: ResearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which completion backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    OpenAI,
    Ollama,
    Local,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::OpenAI => write!(f, "openai"),
            ProviderType::Ollama => write!(f, "ollama"),
            ProviderType::Local => write!(f, "local"),
        }
    }
}

/// Completion service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default)]
    pub provider_type: ProviderType,

    #[serde(default = "default_model")]
    pub model: String,

    /// Falls back to OPENAI_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL override (OpenAI, Ollama) or full endpoint (local)
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub max_tokens: Option<u32>,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider_type: ProviderType::default(),
            model: default_model(),
            api_key: None,
            endpoint: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        if let Some(endpoint) = &self.endpoint {
            validate_url(endpoint)?;
        }

        match self.provider_type {
            ProviderType::OpenAI if !has_value(&self.api_key) => {
                Err("OpenAI requires an api_key (or OPENAI_API_KEY)".to_string())
            }
            ProviderType::Local if self.endpoint.is_none() => {
                Err("Local provider requires an endpoint".to_string())
            }
            _ => {
                if let Some(t) = self.temperature {
                    if !(0.0..=2.0).contains(&t) {
                        return Err(format!("Temperature {} is outside 0.0-2.0", t));
                    }
                }
                Ok(())
            }
        }
    }

    /// Convert to the provider description used by `ProviderFactory`.
    pub fn to_model_provider(&self) -> Result<ModelProvider, ApiError> {
        match self.provider_type {
            ProviderType::OpenAI => {
                let api_key = self
                    .api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| {
                        ApiError::ConfigError(
                            "OPENAI_API_KEY is not set; completion is unavailable".to_string(),
                        )
                    })?;
                Ok(ModelProvider::OpenAI {
                    model: self.model.clone(),
                    api_key,
                    base_url: self.endpoint.clone(),
                })
            }
            ProviderType::Ollama => Ok(ModelProvider::Ollama {
                model: self.model.clone(),
                base_url: self.endpoint.clone(),
            }),
            ProviderType::Local => {
                let endpoint = self.endpoint.clone().ok_or_else(|| {
                    ApiError::ConfigError("Local provider requires an endpoint".to_string())
                })?;
                Ok(ModelProvider::LocalCustom {
                    model: self.model.clone(),
                    endpoint,
                    api_key: self.api_key.clone(),
                })
            }
        }
    }

    /// Options sent with every completion call. Unset values keep the provider defaults.
    pub fn completion_options(&self) -> CompletionOptions {
        let mut options = CompletionOptions::default();
        if self.temperature.is_some() {
            options.temperature = self.temperature;
        }
        options.max_tokens = self.max_tokens;
        options
    }
}

/// Search service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Falls back to SERPER_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,
}

fn default_search_endpoint() -> String {
    DEFAULT_SERPER_ENDPOINT.to_string()
}

fn default_search_timeout() -> u64 {
    30
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_search_endpoint(),
            timeout_secs: default_search_timeout(),
        }
    }
}

impl SearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    // A missing key is reported when research runs, not here.
    pub fn validate(&self) -> Result<(), String> {
        validate_url(&self.endpoint)?;
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Bulk scheduler settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Per-item bound; unset means items may take as long as the provider does
    #[serde(default)]
    pub item_timeout_secs: Option<u64>,
}

fn default_chunk_size() -> usize {
    5
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            item_timeout_secs: None,
        }
    }
}

impl BulkConfig {
    pub fn item_timeout(&self) -> Option<Duration> {
        self.item_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be at least 1".to_string());
        }
        if self.item_timeout_secs == Some(0) {
            return Err("item_timeout_secs must be at least 1 when set".to_string());
        }
        Ok(())
    }
}

/// Research context settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    #[serde(default = "default_max_organic_results")]
    pub max_organic_results: usize,

    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,
}

fn default_max_organic_results() -> usize {
    5
}

fn default_max_context_chars() -> usize {
    2000
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            max_organic_results: default_max_organic_results(),
            max_context_chars: default_max_context_chars(),
        }
    }
}

impl ResearchConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_organic_results == 0 {
            return Err("max_organic_results must be at least 1".to_string());
        }
        if self.max_context_chars < 100 {
            return Err("max_context_chars must be at least 100".to_string());
        }
        Ok(())
    }
}

fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn validate_url(url: &str) -> Result<(), String> {
    reqwest::Url::parse(url)
        .map(|_| ())
        .map_err(|e| format!("Invalid endpoint URL '{}': {}", url, e))
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Completion(String),
    Search(String),
    Bulk(String),
    Research(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Completion(msg) => write!(f, "completion: {}", msg),
            ValidationError::Search(msg) => write!(f, "search: {}", msg),
            ValidationError::Bulk(msg) => write!(f, "bulk: {}", msg),
            ValidationError::Research(msg) => write!(f, "research: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ContentConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.completion.validate() {
            errors.push(ValidationError::Completion(e));
        }
        if let Err(e) = self.search.validate() {
            errors.push(ValidationError::Search(e));
        }
        if let Err(e) = self.bulk.validate() {
            errors.push(ValidationError::Bulk(e));
        }
        if let Err(e) = self.research.validate() {
            errors.push(ValidationError::Research(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Same as [`validate`](Self::validate), folded into one `ConfigError`.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed: {}",
                msgs.join("; ")
            ))
        })
    }
}
