//! Environment sources.
//!
//! `CONTENT_INTEL__SECTION__KEY` overrides any file value. The conventional
//! `OPENAI_API_KEY` and `SERPER_API_KEY` variables only fill credentials that no
//! file or prefixed variable provides.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENV_PREFIX: &str = "CONTENT_INTEL";

const CREDENTIALS: [(&str, &str); 2] = [
    ("OPENAI_API_KEY", "completion.api_key"),
    ("SERPER_API_KEY", "search.api_key"),
];

/// Register conventional credential variables as defaults.
pub fn add_credential_defaults(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (var, key) in CREDENTIALS {
        if let Ok(value) = std::env::var(var) {
            if !value.trim().is_empty() {
                builder = builder.set_default(key, value)?;
            }
        }
    }
    Ok(builder)
}

/// Add the prefixed environment override source.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    )
}
