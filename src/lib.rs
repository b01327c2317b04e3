//! Content Intelligence: listing copy, ad copy and research briefs
//!
//! Orchestrates a completion model (OpenAI-compatible) and a web search service into
//! structured marketing content. Platform length limits on ad copy are enforced after
//! generation, bulk ad runs are scheduled in bounded chunks, and research briefs are
//! grounded in live search results.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod provider;
pub mod research;
pub mod search;
pub mod truncate;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::ContentApi;
pub use error::{ApiError, ErrorCategory};
