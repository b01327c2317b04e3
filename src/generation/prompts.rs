//! Prompt assembly for each use case.

use crate::types::{
    AdRequest, ListingRequest, GOOGLE_DESCRIPTION_MAX_CHARS, GOOGLE_HEADLINE_MAX_CHARS,
};

pub fn listing_system_prompt(request: &ListingRequest) -> String {
    format!(
        "You are an expert copywriter for {platform}.\n\
         Tone: {tone}.\n\
         Return JSON format only.\n\
         Structure: title, description_html (use <b> for emphasis), \
         bullet_points (list), seo_tags (list).",
        platform = request.platform.trim(),
        tone = request.tone.trim(),
    )
}

pub fn listing_user_prompt(request: &ListingRequest) -> String {
    format!(
        "Product: {}. Features: {}",
        request.product_name.trim(),
        request.features.join(", ")
    )
}

pub fn ad_prompt(request: &AdRequest) -> String {
    format!(
        "Write ad copy for {product}.\n\
         Audience: {audience}.\n\
         Keywords: {keywords}.\n\
         \n\
         Return JSON:\n\
         - facebook_primary_text\n\
         - facebook_headline\n\
         - google_headline (strict max {headline_max} chars, catchy)\n\
         - google_description (strict max {description_max} chars)\n\
         - meta_title (SEO optimized)\n\
         - meta_description",
        product = request.product_name.trim(),
        audience = request.target_audience.trim(),
        keywords = request.keywords.join(", "),
        headline_max = GOOGLE_HEADLINE_MAX_CHARS,
        description_max = GOOGLE_DESCRIPTION_MAX_CHARS,
    )
}

pub fn research_prompt(topic: &str, context: &str) -> String {
    format!(
        "Create a Content Brief for '{topic}'.\n\
         Based on real search data:\n\
         {context}\n\
         \n\
         Return JSON:\n\
         - topic\n\
         - search_volume_intent (infer this from the questions)\n\
         - competitor_urls (list of URLs from the top results)\n\
         - people_also_ask (list of questions)\n\
         - content_outline (list of H2 headings for a blog post)",
        topic = topic.trim(),
        context = context,
    )
}
