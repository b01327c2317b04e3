//! CLI routing against mocked services

use super::test_utils::{ad_reply, api_with, empty_search, MockProvider};
use content_intel::cli::{Commands, OutputFormat, RunContext};
use content_intel::config::ContentConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn context(dir: &TempDir) -> RunContext {
    RunContext::with_config(ContentConfig::default(), dir.path().to_path_buf(), None)
}

#[test]
fn test_bulk_command_json_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bulk.json");
    std::fs::write(
        &input,
        r#"{"items": [
            {"product_name": "Tote", "target_audience": "commuters"},
            {"product_name": "Backpack", "target_audience": "students", "keywords": ["laptop"]}
        ]}"#,
    )
    .unwrap();

    let provider = Arc::new(MockProvider::new(|prompt| {
        let headline = if prompt.contains("Backpack") { "Backpack" } else { "Tote" };
        Ok(ad_reply(headline))
    }));
    let api = api_with(provider, empty_search());

    let out = context(&dir)
        .handle_content(
            &api,
            &Commands::Bulk {
                input,
                chunk_size: Some(1),
            },
            OutputFormat::Json,
        )
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["results"][0]["result"]["google_headline"], "Tote");
    assert_eq!(value["results"][1]["result"]["google_headline"], "Backpack");
}

#[test]
fn test_ad_command_text_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ad.json");
    std::fs::write(
        &input,
        r#"{"product_name": "Velocity Runner", "target_audience": "runners"}"#,
    )
    .unwrap();

    let provider = Arc::new(MockProvider::new(|_| {
        Ok(ad_reply("Buy the best running shoes today"))
    }));
    let api = api_with(provider, empty_search());

    let out = context(&dir)
        .handle_content(&api, &Commands::Ad { input }, OutputFormat::Text)
        .unwrap();
    assert!(out.contains("Buy the best running shoes..."));
}

#[test]
fn test_malformed_input_never_reaches_provider() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("listing.json");
    std::fs::write(&input, "{not json").unwrap();

    let provider = Arc::new(MockProvider::new(|_| Ok("{}".to_string())));
    let api = api_with(provider.clone(), empty_search());

    let err = context(&dir)
        .handle_content(&api, &Commands::Listing { input }, OutputFormat::Json)
        .unwrap_err();
    assert_eq!(
        err.category(),
        content_intel::ErrorCategory::InvalidRequest
    );
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let api = api_with(Arc::new(MockProvider::new(|_| Ok("{}".to_string()))), empty_search());

    let result = context(&dir).handle_content(
        &api,
        &Commands::Research {
            input: PathBuf::from("/nonexistent/research.json"),
        },
        OutputFormat::Text,
    );
    assert!(result.is_err());
}
