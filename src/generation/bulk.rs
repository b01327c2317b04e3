//! Bulk ad copy scheduler.
//!
//! Items run in fixed-size chunks: every item of a chunk is in flight at once,
//! and the next chunk starts only after the whole chunk has settled. This caps
//! concurrent completion calls at the chunk size. Each outcome is written to
//! the slot matching its input position, so completion order never affects the
//! output order. A failing item becomes a `Failure` outcome and never stops
//! its siblings or later chunks.

use crate::error::{ApiError, ErrorCategory};
use crate::generation::ads::AdCopyGenerator;
use crate::types::{AdCopy, AdRequest, BatchItemOutcome, BulkAdReport};
use futures::stream::{FuturesUnordered, StreamExt};
use std::ops::Range;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Something that turns one ad request into ad copy.
#[allow(async_fn_in_trait)]
pub trait AdItemGenerator: Send + Sync {
    async fn generate_item(&self, request: &AdRequest) -> Result<AdCopy, ApiError>;
}

impl AdItemGenerator for AdCopyGenerator {
    async fn generate_item(&self, request: &AdRequest) -> Result<AdCopy, ApiError> {
        self.generate(request).await
    }
}

/// Contiguous index ranges covering `len` items in chunks of `chunk_size`.
pub fn plan_chunks(len: usize, chunk_size: usize) -> Result<Vec<Range<usize>>, ApiError> {
    if chunk_size == 0 {
        return Err(ApiError::InvalidRequest(
            "chunk_size must be at least 1".to_string(),
        ));
    }
    Ok((0..len)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(len))
        .collect())
}

pub struct BulkScheduler {
    item_timeout: Option<Duration>,
}

impl Default for BulkScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkScheduler {
    pub const DEFAULT_CHUNK_SIZE: usize = 5;

    pub fn new() -> Self {
        Self { item_timeout: None }
    }

    /// Bound each item's generation; an item that overruns becomes a timeout failure.
    pub fn with_item_timeout(item_timeout: Option<Duration>) -> Self {
        Self { item_timeout }
    }

    /// Run every item and return one outcome per item, in input order.
    ///
    /// Fails as a whole only for a malformed call (`chunk_size == 0`).
    pub async fn run<G: AdItemGenerator>(
        &self,
        generator: &G,
        items: &[AdRequest],
        chunk_size: usize,
    ) -> Result<BulkAdReport, ApiError> {
        let chunks = plan_chunks(items.len(), chunk_size)?;
        let started = Instant::now();
        info!(
            total_items = items.len(),
            chunk_size,
            total_chunks = chunks.len(),
            "bulk run started"
        );

        let mut slots: Vec<Option<BatchItemOutcome>> = (0..items.len()).map(|_| None).collect();

        for (chunk_index, range) in chunks.iter().enumerate() {
            let mut in_flight = FuturesUnordered::new();
            for index in range.clone() {
                let item = &items[index];
                in_flight.push(async move { (index, self.run_item(generator, item).await) });
            }

            let mut failed_count = 0usize;
            while let Some((index, result)) = in_flight.next().await {
                if let Err(err) = &result {
                    failed_count += 1;
                    warn!(
                        chunk_index,
                        item_index = index,
                        category = %err.category(),
                        error = %err,
                        "bulk item failed"
                    );
                }
                slots[index] = Some(BatchItemOutcome::from_result(result));
            }

            info!(
                chunk_index,
                total_count = range.len(),
                failed_count,
                "bulk chunk completed"
            );
        }

        let results: Vec<BatchItemOutcome> = slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| BatchItemOutcome::Failure {
                    reason: "item was not scheduled".to_string(),
                    category: ErrorCategory::InvalidRequest,
                })
            })
            .collect();
        let report = BulkAdReport::new(results);

        info!(
            total_items = report.count,
            succeeded = report.succeeded(),
            failed = report.failed(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "bulk run completed"
        );
        Ok(report)
    }

    async fn run_item<G: AdItemGenerator>(
        &self,
        generator: &G,
        item: &AdRequest,
    ) -> Result<AdCopy, ApiError> {
        match self.item_timeout {
            Some(limit) => tokio::time::timeout(limit, generator.generate_item(item))
                .await
                .map_err(|_| ApiError::Timeout(limit))?,
            None => generator.generate_item(item).await,
        }
    }
}
