//! Two-stage research pipeline: search context first, then a brief synthesized
//! from that context.

pub mod brief;
pub mod context;

pub use brief::ResearchGenerator;
pub use context::{ContextResult, ResearchContextFetcher, SearchContext};
