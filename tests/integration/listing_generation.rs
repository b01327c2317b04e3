//! Product listing generation through the public API

use super::test_utils::{api_with, empty_search, MockProvider};
use content_intel::types::ListingRequest;
use content_intel::ErrorCategory;
use std::sync::Arc;

fn listing_reply() -> serde_json::Value {
    serde_json::json!({
        "title": "Velocity Runner Lightweight Running Shoes",
        "description_html": "<b>Run further</b> with responsive cushioning.",
        "bullet_points": ["Breathable mesh", "Responsive foam", "Grippy outsole"],
        "seo_tags": ["running shoes", "lightweight trainers"]
    })
}

#[tokio::test]
async fn test_listing_fields_are_returned_verbatim() {
    let provider = Arc::new(MockProvider::fixed(listing_reply()));
    let api = api_with(provider.clone(), empty_search());

    let request = ListingRequest::new(
        "Velocity Runner",
        vec!["breathable mesh".to_string(), "responsive foam".to_string()],
    );
    let listing = api.generate_listing(&request).await.unwrap();

    assert_eq!(listing.title, "Velocity Runner Lightweight Running Shoes");
    assert_eq!(listing.bullet_points.len(), 3);
    assert_eq!(listing.seo_tags[1], "lightweight trainers");

    let prompts = provider.prompts();
    assert_eq!(
        prompts[0],
        "Product: Velocity Runner. Features: breathable mesh, responsive foam"
    );
}

#[tokio::test]
async fn test_listing_reply_in_code_fence_is_accepted() {
    let fenced = format!("```json\n{}\n```", listing_reply());
    let provider = Arc::new(MockProvider::new(move |_| Ok(fenced.clone())));
    let api = api_with(provider, empty_search());

    let listing = api
        .generate_listing(&ListingRequest::new("Velocity Runner", vec![]))
        .await
        .unwrap();
    assert_eq!(listing.bullet_points[0], "Breathable mesh");
}

#[tokio::test]
async fn test_listing_missing_tags_is_parse_error() {
    let provider = Arc::new(MockProvider::fixed(serde_json::json!({
        "title": "t",
        "description_html": "d",
        "bullet_points": []
    })));
    let api = api_with(provider, empty_search());

    let err = api
        .generate_listing(&ListingRequest::new("Velocity Runner", vec![]))
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
}
