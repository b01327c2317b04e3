//! Marketplace product listing flow.

use crate::error::ApiError;
use crate::generation::adapter::GenerationAdapter;
use crate::generation::prompts::{listing_system_prompt, listing_user_prompt};
use crate::generation::reply::StructuredReply;
use crate::types::{ListingContent, ListingRequest, UseCase};
use std::sync::Arc;
use tracing::info;

pub struct ListingGenerator {
    adapter: Arc<GenerationAdapter>,
}

impl ListingGenerator {
    pub fn new(adapter: Arc<GenerationAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn generate(&self, request: &ListingRequest) -> Result<ListingContent, ApiError> {
        request.validate()?;
        info!(
            product = %request.product_name,
            platform = %request.platform,
            "generating listing"
        );

        let system = listing_system_prompt(request);
        let user = listing_user_prompt(request);
        let reply = self
            .adapter
            .generate(Some(&system), &user)
            .await
            .map_err(|e| ApiError::generation(UseCase::Listing, e))?;

        listing_from_reply(&reply).map_err(|e| ApiError::generation(UseCase::Listing, e))
    }
}

pub fn listing_from_reply(reply: &StructuredReply) -> Result<ListingContent, ApiError> {
    Ok(ListingContent {
        title: reply.require_str("title")?,
        description_html: reply.require_str("description_html")?,
        bullet_points: reply.require_str_list("bullet_points")?,
        seo_tags: reply.require_str_list("seo_tags")?,
    })
}
