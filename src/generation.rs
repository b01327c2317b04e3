//! Generation flows: the completion adapter, per-use-case generators and the
//! bulk scheduler.

pub mod adapter;
pub mod ads;
pub mod bulk;
pub mod listing;
pub mod prompts;
pub mod reply;

pub use adapter::GenerationAdapter;
pub use ads::{enforce_ad_limits, AdCopyGenerator};
pub use bulk::{plan_chunks, AdItemGenerator, BulkScheduler};
pub use listing::ListingGenerator;
pub use reply::StructuredReply;
