//! Merge rules: defaults, override order, conflict handling.
//!
//! Defaults sit below every source. Later sources win key by key, so a workspace file
//! that sets only `bulk.chunk_size` keeps everything else from the global file.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("completion.provider_type", "openai")?
        .set_default("completion.model", "gpt-3.5-turbo")?
        .set_default("search.endpoint", crate::search::DEFAULT_SERPER_ENDPOINT)?
        .set_default("search.timeout_secs", 30)?
        .set_default("bulk.chunk_size", 5)?
        .set_default("research.max_organic_results", 5)?
        .set_default("research.max_context_chars", 2000)
}
