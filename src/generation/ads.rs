//! Ad copy flow. The one flow with a hard output guarantee: the Google headline
//! and description never exceed their platform limits, whatever the model sent.

use crate::error::ApiError;
use crate::generation::adapter::GenerationAdapter;
use crate::generation::prompts::ad_prompt;
use crate::generation::reply::StructuredReply;
use crate::truncate::enforce_char_limit;
use crate::types::{
    AdCopy, AdRequest, UseCase, GOOGLE_DESCRIPTION_MAX_CHARS, GOOGLE_HEADLINE_MAX_CHARS,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct AdCopyGenerator {
    adapter: Arc<GenerationAdapter>,
}

impl AdCopyGenerator {
    pub fn new(adapter: Arc<GenerationAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn generate(&self, request: &AdRequest) -> Result<AdCopy, ApiError> {
        request.validate()?;
        info!(
            product = %request.product_name,
            keywords = request.keywords.len(),
            "generating ad copy"
        );

        let reply = self
            .adapter
            .generate(None, &ad_prompt(request))
            .await
            .map_err(|e| ApiError::generation(UseCase::AdCopy, e))?;

        let copy =
            ad_copy_from_reply(&reply).map_err(|e| ApiError::generation(UseCase::AdCopy, e))?;
        Ok(enforce_ad_limits(copy))
    }
}

pub fn ad_copy_from_reply(reply: &StructuredReply) -> Result<AdCopy, ApiError> {
    Ok(AdCopy {
        facebook_primary_text: reply.require_str("facebook_primary_text")?,
        facebook_headline: reply.require_str("facebook_headline")?,
        google_headline: reply.require_str("google_headline")?,
        google_description: reply.require_str("google_description")?,
        meta_title: reply.require_str("meta_title")?,
        meta_description: reply.require_str("meta_description")?,
    })
}

/// Bring the length-limited Google fields within their limits.
pub fn enforce_ad_limits(mut copy: AdCopy) -> AdCopy {
    copy.google_headline = enforce_field(
        "google_headline",
        &copy.google_headline,
        GOOGLE_HEADLINE_MAX_CHARS,
    );
    copy.google_description = enforce_field(
        "google_description",
        &copy.google_description,
        GOOGLE_DESCRIPTION_MAX_CHARS,
    );
    copy
}

fn enforce_field(field: &str, value: &str, limit: usize) -> String {
    let bounded = enforce_char_limit(value, limit);
    if bounded != value {
        debug!(
            field,
            limit,
            original_chars = value.chars().count(),
            "truncated over-long field"
        );
    }
    bounded
}
