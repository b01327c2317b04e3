//! Content API
//!
//! One entry point per use case: listing copy, ad copy (single and bulk) and research
//! briefs. All flows share one completion client; research also uses the search client.

use crate::config::ContentConfig;
use crate::error::ApiError;
use crate::generation::{AdCopyGenerator, BulkScheduler, GenerationAdapter, ListingGenerator};
use crate::provider::{ModelProviderClient, ProviderFactory};
use crate::research::{ResearchContextFetcher, ResearchGenerator};
use crate::search::{SearchClient, SerperClient};
use crate::types::{
    AdCopy, AdRequest, BulkAdReport, ContentBrief, ListingContent, ListingRequest,
    ResearchRequest,
};
use std::sync::Arc;
use tracing::info;

pub struct ContentApi {
    listing: ListingGenerator,
    ads: AdCopyGenerator,
    research: ResearchGenerator,
    scheduler: BulkScheduler,
    default_chunk_size: usize,
}

impl ContentApi {
    /// Build the API over explicit clients.
    pub fn new(
        completion: Arc<dyn ModelProviderClient>,
        search: Arc<dyn SearchClient>,
        config: &ContentConfig,
    ) -> Self {
        let adapter = Arc::new(GenerationAdapter::new(
            completion,
            config.completion.completion_options(),
        ));

        Self {
            listing: ListingGenerator::new(adapter.clone()),
            ads: AdCopyGenerator::new(adapter.clone()),
            research: ResearchGenerator::new(
                ResearchContextFetcher::new(search, &config.research),
                adapter,
                config.research.max_context_chars,
            ),
            scheduler: BulkScheduler::with_item_timeout(config.bulk.item_timeout()),
            default_chunk_size: config.bulk.chunk_size,
        }
    }

    /// Build the API from configuration, creating the real HTTP clients.
    ///
    /// Fails with a configuration error when the completion service has no credentials.
    /// A missing search key is tolerated here and reported by research calls.
    pub fn from_config(config: &ContentConfig) -> Result<Self, ApiError> {
        let provider = config.completion.to_model_provider()?;
        let completion: Arc<dyn ModelProviderClient> =
            Arc::from(ProviderFactory::create_client(&provider)?);
        let search: Arc<dyn SearchClient> = Arc::new(SerperClient::new(
            config.search.api_key.clone(),
            Some(config.search.endpoint.clone()),
            config.search.timeout(),
        )?);

        info!(
            provider = %config.completion.provider_type,
            model = %completion.model_name(),
            "content api ready"
        );
        Ok(Self::new(completion, search, config))
    }

    pub async fn generate_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<ListingContent, ApiError> {
        self.listing.generate(request).await
    }

    pub async fn generate_ad(&self, request: &AdRequest) -> Result<AdCopy, ApiError> {
        self.ads.generate(request).await
    }

    /// Generate ad copy for every item. Uses the configured chunk size unless one is given.
    pub async fn generate_ads_bulk(
        &self,
        items: &[AdRequest],
        chunk_size: Option<usize>,
    ) -> Result<BulkAdReport, ApiError> {
        let chunk_size = chunk_size.unwrap_or(self.default_chunk_size);
        self.scheduler.run(&self.ads, items, chunk_size).await
    }

    pub async fn generate_research_brief(
        &self,
        request: &ResearchRequest,
    ) -> Result<ContentBrief, ApiError> {
        self.research.generate(request).await
    }
}
