//! Generated content presentation: listing, ad copy, bulk report and research brief.

use super::shared::{bullet_list, format_section_heading, to_pretty_json};
use crate::cli::parse::OutputFormat;
use crate::types::{AdCopy, BatchItemOutcome, BulkAdReport, ContentBrief, ListingContent};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_listing(listing: &ListingContent, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_pretty_json(listing);
    }
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Listing")));
    out.push_str(&format!("Title: {}\n\n", listing.title));
    out.push_str("Description (HTML):\n");
    out.push_str(&format!("  {}\n\n", listing.description_html));
    out.push_str("Bullet points:\n");
    out.push_str(&bullet_list(&listing.bullet_points));
    out.push_str(&format!("\nSEO tags: {}\n", listing.seo_tags.join(", ")));
    out
}

fn ad_copy_table(copy: &AdCopy) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Field", "Chars", "Text"]);
    let rows = [
        ("Facebook primary text", &copy.facebook_primary_text),
        ("Facebook headline", &copy.facebook_headline),
        ("Google headline", &copy.google_headline),
        ("Google description", &copy.google_description),
        ("Meta title", &copy.meta_title),
        ("Meta description", &copy.meta_description),
    ];
    for (label, text) in rows {
        table.add_row(vec![
            label.to_string(),
            text.chars().count().to_string(),
            text.to_string(),
        ]);
    }
    table
}

pub fn format_ad_copy(copy: &AdCopy, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_pretty_json(copy);
    }
    format!(
        "{}\n\n{}\n",
        format_section_heading("Ad copy"),
        ad_copy_table(copy)
    )
}

pub fn format_bulk_report(report: &BulkAdReport, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_pretty_json(report);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Bulk ad copy")));
    if report.results.is_empty() {
        out.push_str("No items.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Status", "Google headline / reason"]);
    for (index, outcome) in report.results.iter().enumerate() {
        let (status, detail) = match outcome {
            BatchItemOutcome::Success { result } => ("ok".to_string(), result.google_headline.clone()),
            BatchItemOutcome::Failure { reason, category } => {
                (format!("failed ({})", category), reason.clone())
            }
        };
        table.add_row(vec![(index + 1).to_string(), status, detail]);
    }
    out.push_str(&format!("{}\n\n", table));

    let succeeded = format!("{} succeeded", report.succeeded());
    let failed = format!("{} failed", report.failed());
    if report.failed() == 0 {
        out.push_str(&format!("{}, {}\n", succeeded.green(), failed));
    } else {
        out.push_str(&format!("{}, {}\n", succeeded.green(), failed.red()));
    }
    out
}

pub fn format_brief(brief: &ContentBrief, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_pretty_json(brief);
    }
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Research brief: {}", brief.topic))
    ));
    out.push_str(&format!("Search intent: {}\n\n", brief.search_volume_intent));
    out.push_str("Competitor URLs:\n");
    out.push_str(&bullet_list(&brief.competitor_urls));
    out.push_str("\nPeople also ask:\n");
    out.push_str(&bullet_list(&brief.people_also_ask));
    out.push_str("\nOutline:\n");
    for (i, section) in brief.content_outline.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, section));
    }
    out
}
