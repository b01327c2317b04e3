//! Scripted completion and search clients for unit tests.

use crate::error::ApiError;
use crate::provider::{
    ChatMessage, CompletionOptions, CompletionResponse, ModelProviderClient, TokenUsage,
};
use crate::search::{SearchClient, SearchQuery, SearchResponse};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

type Responder = dyn Fn(&[ChatMessage]) -> Result<String, ApiError> + Send + Sync;

/// Completion client that answers from a script and records every call.
pub struct ScriptedProvider {
    responder: Box<Responder>,
    calls: Mutex<Vec<(Vec<ChatMessage>, CompletionOptions)>>,
}

impl ScriptedProvider {
    /// Replies are handed out in order; once exhausted every call fails.
    pub fn new(replies: Vec<Result<String, ApiError>>) -> Self {
        let queue = Mutex::new(VecDeque::from(replies));
        Self::with_responder(move |_| {
            queue
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::ProviderError("script exhausted".to_string())))
        })
    }

    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&[ChatMessage]) -> Result<String, ApiError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Vec<ChatMessage>, CompletionOptions)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ModelProviderClient for ScriptedProvider {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
    ) -> Result<CompletionResponse, ApiError> {
        let reply = (self.responder)(&messages);
        self.calls.lock().push((messages, options));

        Ok(CompletionResponse {
            content: reply?,
            model: "scripted-model".to_string(),
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30,
            },
            finish_reason: Some("stop".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Search client that returns one canned reply (or error) and records queries.
pub struct ScriptedSearch {
    reply: Mutex<Option<Result<SearchResponse, ApiError>>>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl ScriptedSearch {
    pub fn new(reply: Result<SearchResponse, ApiError>) -> Self {
        Self {
            reply: Mutex::new(Some(reply)),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl SearchClient for ScriptedSearch {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        self.queries.lock().push(query.clone());
        self.reply
            .lock()
            .take()
            .unwrap_or_else(|| Err(ApiError::SearchRequestFailed("script exhausted".to_string())))
    }
}
