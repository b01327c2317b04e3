//! Request and result contracts for each generation use case.

use crate::error::{ApiError, ErrorCategory};
use serde::{Deserialize, Serialize};

/// The generation flow a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    Listing,
    AdCopy,
    Research,
}

impl std::fmt::Display for UseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UseCase::Listing => "listing",
            UseCase::AdCopy => "ad copy",
            UseCase::Research => "research",
        };
        f.write_str(label)
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidRequest(format!("{} cannot be empty", field)));
    }
    Ok(())
}

fn default_platform() -> String {
    "Shopify".to_string()
}

fn default_tone() -> String {
    "Persuasive".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

/// Product listing request for a marketplace (Shopify, Amazon, Etsy, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRequest {
    pub product_name: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

impl ListingRequest {
    pub fn new(product_name: impl Into<String>, features: Vec<String>) -> Self {
        Self {
            product_name: product_name.into(),
            features,
            platform: default_platform(),
            tone: default_tone(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("product_name", &self.product_name)?;
        require_text("platform", &self.platform)?;
        require_text("tone", &self.tone)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingContent {
    pub title: String,
    pub description_html: String,
    pub bullet_points: Vec<String>,
    pub seo_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRequest {
    pub product_name: String,
    pub target_audience: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl AdRequest {
    pub fn new(
        product_name: impl Into<String>,
        target_audience: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            target_audience: target_audience.into(),
            keywords,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("product_name", &self.product_name)?;
        require_text("target_audience", &self.target_audience)
    }
}

/// Maximum length of a Google Ads headline.
pub const GOOGLE_HEADLINE_MAX_CHARS: usize = 30;
/// Maximum length of a Google Ads description.
pub const GOOGLE_DESCRIPTION_MAX_CHARS: usize = 90;

/// Ad copy across Facebook, Google Ads and page metadata.
///
/// `google_headline` and `google_description` are bounded by
/// [`GOOGLE_HEADLINE_MAX_CHARS`] and [`GOOGLE_DESCRIPTION_MAX_CHARS`] once the
/// copy has been returned by the ad flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCopy {
    pub facebook_primary_text: String,
    pub facebook_headline: String,
    pub google_headline: String,
    pub google_description: String,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkAdRequest {
    pub items: Vec<AdRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub topic: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl ResearchRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            country: default_country(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require_text("topic", &self.topic)?;
        require_text("country", &self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBrief {
    pub topic: String,
    pub search_volume_intent: String,
    pub competitor_urls: Vec<String>,
    pub people_also_ask: Vec<String>,
    pub content_outline: Vec<String>,
}

/// Outcome of one item in a bulk run, kept at the item's input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItemOutcome {
    Success {
        result: AdCopy,
    },
    Failure {
        reason: String,
        category: ErrorCategory,
    },
}

impl BatchItemOutcome {
    pub fn from_result(result: Result<AdCopy, ApiError>) -> Self {
        match result {
            Ok(result) => BatchItemOutcome::Success { result },
            Err(err) => BatchItemOutcome::Failure {
                reason: err.to_string(),
                category: err.category(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchItemOutcome::Success { .. })
    }
}

/// Result of a bulk ad-copy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkAdReport {
    pub results: Vec<BatchItemOutcome>,
    pub count: usize,
}

impl BulkAdReport {
    pub fn new(results: Vec<BatchItemOutcome>) -> Self {
        let count = results.len();
        Self { results, count }
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.count - self.succeeded()
    }
}
