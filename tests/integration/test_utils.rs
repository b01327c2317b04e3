//! Shared test utilities for integration tests
//!
//! Mock completion and search clients that never touch the network, plus helpers for
//! isolating configuration environment variables.

use async_trait::async_trait;
use content_intel::config::ContentConfig;
use content_intel::provider::{
    ChatMessage, CompletionOptions, CompletionResponse, ModelProviderClient, TokenUsage,
};
use content_intel::search::{
    OrganicResult, RelatedQuestion, SearchClient, SearchQuery, SearchResponse,
};
use content_intel::{ApiError, ContentApi};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

type Responder = dyn Fn(&str) -> Result<String, ApiError> + Send + Sync;

/// Completion client answering from the last message of each call.
///
/// Tracks how many calls are in flight at once so tests can check concurrency bounds.
pub struct MockProvider {
    responder: Box<Responder>,
    delay: Duration,
    prompts: Mutex<Vec<String>>,
    in_flight: Mutex<usize>,
    peak_in_flight: Mutex<usize>,
}

impl MockProvider {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<String, ApiError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            delay: Duration::ZERO,
            prompts: Mutex::new(Vec::new()),
            in_flight: Mutex::new(0),
            peak_in_flight: Mutex::new(0),
        }
    }

    /// Always reply with the same body.
    pub fn fixed(reply: serde_json::Value) -> Self {
        let body = reply.to_string();
        Self::new(move |_| Ok(body.clone()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }

    pub fn peak_in_flight(&self) -> usize {
        *self.peak_in_flight.lock()
    }
}

#[async_trait]
impl ModelProviderClient for MockProvider {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        _options: CompletionOptions,
    ) -> Result<CompletionResponse, ApiError> {
        let prompt = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().push(prompt.clone());
        {
            let mut in_flight = self.in_flight.lock();
            *in_flight += 1;
            let mut peak = self.peak_in_flight.lock();
            *peak = (*peak).max(*in_flight);
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        *self.in_flight.lock() -= 1;

        let content = (self.responder)(&prompt)?;
        Ok(CompletionResponse {
            content,
            model: "mock-model".to_string(),
            usage: TokenUsage {
                prompt_tokens: 1,
                completion_tokens: 1,
                total_tokens: 2,
            },
            finish_reason: Some("stop".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Search client with a canned reply; records every query.
pub struct MockSearch {
    reply: Box<dyn Fn() -> Result<SearchResponse, ApiError> + Send + Sync>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl MockSearch {
    pub fn returning(response: SearchResponse) -> Self {
        Self {
            reply: Box::new(move || Ok(response.clone())),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing<F>(error: F) -> Self
    where
        F: Fn() -> ApiError + Send + Sync + 'static,
    {
        Self {
            reply: Box::new(move || Err(error())),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl SearchClient for MockSearch {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        self.queries.lock().push(query.clone());
        (self.reply)()
    }
}

pub fn api_with(provider: Arc<MockProvider>, search: Arc<MockSearch>) -> ContentApi {
    ContentApi::new(provider, search, &ContentConfig::default())
}

pub fn empty_search() -> Arc<MockSearch> {
    Arc::new(MockSearch::returning(SearchResponse::default()))
}

/// A well-formed ad copy reply whose google headline is `headline`.
pub fn ad_reply(headline: &str) -> String {
    serde_json::json!({
        "facebook_primary_text": "Built for the long run.",
        "facebook_headline": "Run Further",
        "google_headline": headline,
        "google_description": "Lightweight trainers with responsive cushioning.",
        "meta_title": "Running Shoes | Free Shipping",
        "meta_description": "Shop lightweight running shoes."
    })
    .to_string()
}

/// Search reply for "best coffee makers".
pub fn coffee_search_response() -> SearchResponse {
    SearchResponse {
        organic: (1..=7)
            .map(|i| OrganicResult {
                title: format!("Coffee Maker Review {i}"),
                link: format!("https://site{i}.example/coffee-makers"),
                snippet: "snippet".to_string(),
            })
            .collect(),
        people_also_ask: vec![
            RelatedQuestion {
                question: "What coffee maker do baristas use?".to_string(),
                ..Default::default()
            },
            RelatedQuestion {
                question: "Is a drip coffee maker worth it?".to_string(),
                ..Default::default()
            },
        ],
    }
}

static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with config-related environment variables isolated in `test_dir`.
///
/// XDG_CONFIG_HOME points into the temp dir and credential variables are cleared;
/// everything is restored afterwards. A global mutex serializes callers.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let mut names: Vec<String> = vec![
        "XDG_CONFIG_HOME".to_string(),
        "OPENAI_API_KEY".to_string(),
        "SERPER_API_KEY".to_string(),
        "CONTENT_INTEL_ENV".to_string(),
    ];
    names.extend(vars.iter().map(|(name, _)| name.to_string()));
    let saved: Vec<(String, Option<String>)> = names
        .iter()
        .map(|name| (name.clone(), std::env::var(name).ok()))
        .collect();

    for name in &names {
        std::env::remove_var(name);
    }
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().join("xdg"));
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    for (name, value) in saved {
        match value {
            Some(v) => std::env::set_var(&name, v),
            None => std::env::remove_var(&name),
        }
    }
    result
}
