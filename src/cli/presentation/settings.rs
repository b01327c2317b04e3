//! Configuration presentation: show and validate.

use super::shared::{format_section_heading, to_pretty_json};
use crate::cli::parse::OutputFormat;
use crate::config::{ContentConfig, ValidationError};

const REDACTED: &str = "********";

/// Copy of the configuration with credentials masked.
pub fn redact_config(config: &ContentConfig) -> ContentConfig {
    let mut redacted = config.clone();
    for key in [
        &mut redacted.completion.api_key,
        &mut redacted.search.api_key,
    ] {
        if key.is_some() {
            *key = Some(REDACTED.to_string());
        }
    }
    redacted
}

pub fn format_config_show(config: &ContentConfig, format: OutputFormat) -> String {
    let redacted = redact_config(config);
    match format {
        OutputFormat::Json => to_pretty_json(&redacted),
        OutputFormat::Text => toml::to_string_pretty(&redacted)
            .unwrap_or_else(|e| format!("# failed to render configuration: {}", e)),
    }
}

pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    let mut out = format!("{}\n", format_section_heading("Configuration errors"));
    for error in errors {
        out.push_str(&format!("  - {}\n", error));
    }
    out
}
