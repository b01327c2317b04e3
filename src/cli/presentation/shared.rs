//! Shared presentation helpers.

use owo_colors::OwoColorize;
use serde::Serialize;

/// Section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "  (none)\n".to_string();
    }
    items.iter().map(|item| format!("  - {}\n", item)).collect()
}
