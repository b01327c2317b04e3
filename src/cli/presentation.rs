//! CLI presentation: text and json formatters per command family.

mod content;
mod settings;
mod shared;

pub use content::{format_ad_copy, format_brief, format_bulk_report, format_listing};
pub use settings::{format_config_show, format_validation_errors, redact_config};
