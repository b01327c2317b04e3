//! Bulk ad copy scheduling through the public API

use super::test_utils::{ad_reply, api_with, empty_search, MockProvider};
use content_intel::types::{AdRequest, BatchItemOutcome};
use content_intel::{ApiError, ErrorCategory};
use std::sync::Arc;
use std::time::Duration;

fn sku_items(n: usize) -> Vec<AdRequest> {
    (1..=n)
        .map(|i| AdRequest::new(format!("SKU-{i:02}"), "commuters", vec!["bags".to_string()]))
        .collect()
}

/// Replies with the SKU named in the prompt as the headline; `failing` SKUs are throttled.
fn sku_provider(failing: &'static [&'static str]) -> MockProvider {
    MockProvider::new(move |prompt| {
        let start = prompt.find("SKU-").expect("prompt names a SKU");
        let sku = &prompt[start..start + 6];
        if failing.iter().any(|f| *f == sku) {
            Err(ApiError::ProviderRateLimit(format!("{sku} throttled")))
        } else {
            Ok(ad_reply(sku))
        }
    })
    .with_delay(Duration::from_millis(50))
}

#[tokio::test(start_paused = true)]
async fn test_twelve_items_with_one_failure() {
    let provider = Arc::new(sku_provider(&["SKU-07"]));
    let api = api_with(provider.clone(), empty_search());

    let report = api
        .generate_ads_bulk(&sku_items(12), Some(5))
        .await
        .unwrap();

    assert_eq!(report.count, 12);
    assert_eq!(report.results.len(), 12);
    assert_eq!(report.failed(), 1);
    for (index, outcome) in report.results.iter().enumerate() {
        let sku = format!("SKU-{:02}", index + 1);
        match outcome {
            BatchItemOutcome::Success { result } => {
                assert_ne!(index, 6);
                assert_eq!(result.google_headline, sku);
            }
            BatchItemOutcome::Failure { reason, category } => {
                assert_eq!(index, 6);
                assert_eq!(*category, ErrorCategory::Transport);
                assert!(reason.contains("SKU-07 throttled"));
            }
        }
    }

    assert_eq!(provider.call_count(), 12);
    assert!(provider.peak_in_flight() <= 5);
}

#[tokio::test(start_paused = true)]
async fn test_default_chunk_size_bounds_concurrency() {
    let provider = Arc::new(sku_provider(&[]));
    let api = api_with(provider.clone(), empty_search());

    let report = api.generate_ads_bulk(&sku_items(11), None).await.unwrap();

    assert_eq!(report.succeeded(), 11);
    assert_eq!(provider.peak_in_flight(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_item_fails_alone() {
    let provider = Arc::new(sku_provider(&[]));
    let api = api_with(provider.clone(), empty_search());

    let mut items = sku_items(3);
    items[1].target_audience = String::new();
    let report = api.generate_ads_bulk(&items, Some(2)).await.unwrap();

    assert!(report.results[0].is_success());
    assert!(matches!(
        report.results[1],
        BatchItemOutcome::Failure {
            category: ErrorCategory::InvalidRequest,
            ..
        }
    ));
    assert!(report.results[2].is_success());
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_zero_chunk_size_rejects_batch() {
    let provider = Arc::new(sku_provider(&[]));
    let api = api_with(provider.clone(), empty_search());

    let err = api
        .generate_ads_bulk(&sku_items(3), Some(0))
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidRequest);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_every_item_failing_still_reports_all() {
    let provider = Arc::new(MockProvider::new(|_| {
        Err(ApiError::ProviderRequestFailed("connection reset".to_string()))
    }));
    let api = api_with(provider, empty_search());

    let report = api.generate_ads_bulk(&sku_items(4), Some(3)).await.unwrap();
    assert_eq!(report.count, 4);
    assert_eq!(report.failed(), 4);
}
