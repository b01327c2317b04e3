//! Layered configuration loading

use super::test_utils::with_isolated_env;
use content_intel::config::{ConfigLoader, ProviderType};
use content_intel::ContentApi;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn test_global_then_workspace_then_env() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    write(
        &test_dir.path().join("xdg/content-intel/config.toml"),
        r#"
[completion]
provider_type = "ollama"
model = "llama3"

[bulk]
chunk_size = 4
"#,
    );
    write(
        &workspace.join("config/config.toml"),
        r#"
[bulk]
chunk_size = 3
item_timeout_secs = 60
"#,
    );

    let config = with_isolated_env(
        &test_dir,
        &[("CONTENT_INTEL__RESEARCH__MAX_ORGANIC_RESULTS", "3")],
        || ConfigLoader::load(&workspace).unwrap(),
    );

    assert_eq!(config.completion.provider_type, ProviderType::Ollama);
    assert_eq!(config.completion.model, "llama3");
    assert_eq!(config.bulk.chunk_size, 3);
    assert_eq!(config.bulk.item_timeout_secs, Some(60));
    assert_eq!(config.research.max_organic_results, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_conventional_credentials_are_picked_up() {
    let test_dir = TempDir::new().unwrap();
    let config = with_isolated_env(
        &test_dir,
        &[("OPENAI_API_KEY", "sk-env"), ("SERPER_API_KEY", "serper-env")],
        || ConfigLoader::load(test_dir.path()).unwrap(),
    );

    assert_eq!(config.completion.api_key.as_deref(), Some("sk-env"));
    assert_eq!(config.search.api_key.as_deref(), Some("serper-env"));
    assert!(config.validate().is_ok());
    assert!(ContentApi::from_config(&config).is_ok());
}

#[test]
fn test_missing_openai_key_fails_validation() {
    let test_dir = TempDir::new().unwrap();
    let config = with_isolated_env(&test_dir, &[], || {
        ConfigLoader::load(test_dir.path()).unwrap()
    });

    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("api_key"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let test_dir = TempDir::new().unwrap();
    let file = test_dir.path().join("broken.toml");
    write(&file, "[bulk]\nchunk_size = \"many\"\n");

    let result = with_isolated_env(&test_dir, &[], || ConfigLoader::load_from_file(&file));
    assert!(result.is_err());
}
