//! Error types for the content generation pipeline.

use crate::types::UseCase;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Stable classification of an [`ApiError`], used by callers at the boundary
/// (CLI, bulk outcomes) to map failures uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// A required credential or setting is missing or invalid.
    Configuration,
    /// An external service could not be reached or rejected the call.
    Transport,
    /// The external service replied, but the content did not fit the contract.
    Parse,
    /// The caller's request was malformed.
    InvalidRequest,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Parse => "parse",
            ErrorCategory::InvalidRequest => "invalid_request",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Search request failed: {0}")]
    SearchRequestFailed(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed structured reply: {0}")]
    MalformedReply(String),

    #[error("Reply is missing required field '{0}'")]
    MissingField(String),

    #[error("Reply field '{field}' has the wrong type (expected {expected})")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("{use_case} generation failed: {source}")]
    GenerationFailed {
        use_case: UseCase,
        #[source]
        source: Box<ApiError>,
    },
}

impl ApiError {
    /// Wrap an error with the use case it surfaced in.
    pub fn generation(use_case: UseCase, source: ApiError) -> Self {
        ApiError::GenerationFailed {
            use_case,
            source: Box::new(source),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::ConfigError(_) => ErrorCategory::Configuration,
            ApiError::InvalidRequest(_) => ErrorCategory::InvalidRequest,
            ApiError::ProviderError(_)
            | ApiError::ProviderRequestFailed(_)
            | ApiError::ProviderAuthFailed(_)
            | ApiError::ProviderRateLimit(_)
            | ApiError::ProviderModelNotFound(_)
            | ApiError::SearchRequestFailed(_)
            | ApiError::Timeout(_) => ErrorCategory::Transport,
            ApiError::MalformedReply(_) | ApiError::MissingField(_) | ApiError::FieldType { .. } => {
                ErrorCategory::Parse
            }
            ApiError::GenerationFailed { source, .. } => source.category(),
        }
    }

    /// The innermost error, with any use-case wrapping removed.
    pub fn root(&self) -> &ApiError {
        match self {
            ApiError::GenerationFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
