//! Search context for research briefs.
//!
//! Raw search replies are large. Only the top organic results and the
//! "people also ask" questions are kept, and the rendered block is capped at
//! a character budget before it goes into the synthesis prompt.

use crate::config::ResearchConfig;
use crate::error::ApiError;
use crate::search::{SearchClient, SearchQuery, SearchResponse};
use crate::truncate::enforce_char_limit;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ContextResult {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchContext {
    pub results: Vec<ContextResult>,
    pub questions: Vec<String>,
}

impl SearchContext {
    /// Keep at most `max_results` organic results and every related question.
    pub fn from_response(response: SearchResponse, max_results: usize) -> Self {
        let results = response
            .organic
            .into_iter()
            .take(max_results)
            .map(|r| ContextResult {
                title: r.title.trim().to_string(),
                link: r.link.trim().to_string(),
            })
            .filter(|r| !r.title.is_empty() || !r.link.is_empty())
            .collect();

        let questions = response
            .people_also_ask
            .into_iter()
            .map(|q| q.question.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();

        Self { results, questions }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.questions.is_empty()
    }

    /// Links of the kept organic results, in rank order.
    pub fn links(&self) -> Vec<&str> {
        self.results
            .iter()
            .map(|r| r.link.as_str())
            .filter(|link| !link.is_empty())
            .collect()
    }

    /// Render as a prompt block of at most `max_chars` characters.
    pub fn render(&self, max_chars: usize) -> String {
        let mut block = String::from("Top results:");
        if self.results.is_empty() {
            block.push_str(" none");
        }
        for (rank, result) in self.results.iter().enumerate() {
            block.push_str(&format!("\n{}. {}", rank + 1, result.title));
            if !result.link.is_empty() {
                block.push_str(&format!(" ({})", result.link));
            }
        }

        block.push_str("\nPeople also ask:");
        if self.questions.is_empty() {
            block.push_str(" none");
        }
        for question in &self.questions {
            block.push_str(&format!("\n- {}", question));
        }

        enforce_char_limit(&block, max_chars)
    }
}

pub struct ResearchContextFetcher {
    search: Arc<dyn SearchClient>,
    max_results: usize,
}

impl ResearchContextFetcher {
    pub fn new(search: Arc<dyn SearchClient>, config: &ResearchConfig) -> Self {
        Self {
            search,
            max_results: config.max_organic_results,
        }
    }

    /// One search call for `topic` in `country`, reduced to a [`SearchContext`].
    pub async fn fetch(&self, topic: &str, country: &str) -> Result<SearchContext, ApiError> {
        let query = SearchQuery::new(topic.trim(), country.trim());
        let response = self.search.search(&query).await?;

        let context = SearchContext::from_response(response, self.max_results);
        debug!(
            topic,
            results = context.results.len(),
            questions = context.questions.len(),
            "search context fetched"
        );
        Ok(context)
    }
}
