//! Content brief synthesis.

use crate::error::ApiError;
use crate::generation::adapter::GenerationAdapter;
use crate::generation::prompts::research_prompt;
use crate::generation::reply::StructuredReply;
use crate::research::context::{ResearchContextFetcher, SearchContext};
use crate::types::{ContentBrief, ResearchRequest, UseCase};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ResearchGenerator {
    fetcher: ResearchContextFetcher,
    adapter: Arc<GenerationAdapter>,
    max_context_chars: usize,
}

impl ResearchGenerator {
    pub fn new(
        fetcher: ResearchContextFetcher,
        adapter: Arc<GenerationAdapter>,
        max_context_chars: usize,
    ) -> Self {
        Self {
            fetcher,
            adapter,
            max_context_chars,
        }
    }

    /// Fetch search context, then synthesize a brief from it.
    ///
    /// The completion call is made only after the search succeeded.
    pub async fn generate(&self, request: &ResearchRequest) -> Result<ContentBrief, ApiError> {
        request.validate()?;
        info!(topic = %request.topic, country = %request.country, "generating research brief");

        let context = self
            .fetcher
            .fetch(&request.topic, &request.country)
            .await
            .map_err(|e| ApiError::generation(UseCase::Research, e))?;

        let prompt = research_prompt(&request.topic, &context.render(self.max_context_chars));
        let reply = self
            .adapter
            .generate(None, &prompt)
            .await
            .map_err(|e| ApiError::generation(UseCase::Research, e))?;

        let brief =
            brief_from_reply(&reply).map_err(|e| ApiError::generation(UseCase::Research, e))?;
        Ok(ground_competitor_urls(brief, &context))
    }
}

pub fn brief_from_reply(reply: &StructuredReply) -> Result<ContentBrief, ApiError> {
    Ok(ContentBrief {
        topic: reply.require_str("topic")?,
        search_volume_intent: reply.require_str("search_volume_intent")?,
        competitor_urls: reply.require_str_list("competitor_urls")?,
        people_also_ask: reply.require_str_list("people_also_ask")?,
        content_outline: reply.require_str_list("content_outline")?,
    })
}

/// Keep only competitor URLs that came from the search results. If the model
/// returned none of them, fall back to the result links themselves.
pub fn ground_competitor_urls(mut brief: ContentBrief, context: &SearchContext) -> ContentBrief {
    let known = context.links();
    let before = brief.competitor_urls.len();
    brief.competitor_urls.retain(|url| {
        let url = url.trim_end_matches('/');
        known.iter().any(|link| link.trim_end_matches('/') == url)
    });

    if brief.competitor_urls.len() != before {
        debug!(
            dropped = before - brief.competitor_urls.len(),
            "dropped competitor urls not present in search results"
        );
    }
    if brief.competitor_urls.is_empty() {
        brief.competitor_urls = known.into_iter().map(str::to_string).collect();
    }
    brief
}
