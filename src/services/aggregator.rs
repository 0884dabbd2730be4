//! Fan-out/fan-in aggregation across listing sources.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use futures::future;

use crate::error::{AppError, Result};
use crate::models::{Config, Listing, Origin, SearchOutcome, SearchParams, SourceBatch, SourceReport};
use crate::services::boards::sources_from_config;
use crate::services::source::ListingSource;
use crate::services::transport::Transport;

/// Queries every selected source concurrently and ranks the union.
pub struct Aggregator {
    sources: Vec<Arc<dyn ListingSource>>,
    source_timeout: Duration,
}

impl Aggregator {
    /// Create an aggregator over explicit sources.
    pub fn new(sources: Vec<Arc<dyn ListingSource>>, source_timeout: Duration) -> Self {
        Self {
            sources,
            source_timeout,
        }
    }

    /// Create an aggregator over the enabled built-in adapters.
    pub fn from_config(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self::new(
            sources_from_config(config, transport),
            Duration::from_secs(config.search.source_timeout_secs),
        )
    }

    /// Ranked listings for a search. Never fails.
    pub async fn search_listings(&self, params: &SearchParams) -> Vec<Listing> {
        self.search(params).await.listings
    }

    /// Ranked listings plus a per-source report.
    ///
    /// Sources run concurrently and are awaited as a batch. A source that
    /// errors, panics or exceeds the timeout contributes zero listings and
    /// does not affect the others. The result is sorted by score descending;
    /// ties keep source order.
    pub async fn search(&self, params: &SearchParams) -> SearchOutcome {
        let selected: Vec<Arc<dyn ListingSource>> = self
            .sources
            .iter()
            .filter(|s| params.includes(s.provider()))
            .cloned()
            .collect();

        if selected.is_empty() {
            log::warn!("No enabled source matches the provider filter {:?}", params.provider);
            return SearchOutcome::default();
        }

        let settled = future::join_all(
            selected
                .iter()
                .map(|source| self.guarded_fetch(&**source, params)),
        )
        .await;

        let mut outcome = SearchOutcome::default();
        for (source, (result, elapsed)) in selected.iter().zip(settled) {
            let provider = source.provider();
            let elapsed_ms = elapsed.as_millis() as u64;
            match result {
                Ok(batch) => {
                    log::debug!(
                        "{}: {} listings ({:?}) in {}ms",
                        provider,
                        batch.listings.len(),
                        batch.origin,
                        elapsed_ms
                    );
                    outcome.sources.push(SourceReport {
                        provider,
                        origin: batch.origin,
                        count: batch.listings.len(),
                        elapsed_ms,
                    });
                    outcome.listings.extend(batch.listings);
                }
                Err(error) => {
                    log::warn!("{} contributed no listings: {}", provider, error);
                    outcome.sources.push(SourceReport {
                        provider,
                        origin: Origin::Unavailable,
                        count: 0,
                        elapsed_ms,
                    });
                }
            }
        }

        outcome
            .listings
            .sort_by(|a, b| b.match_score().cmp(&a.match_score()));
        log::info!(
            "Aggregated {} listings from {} sources",
            outcome.listings.len(),
            outcome.sources.len()
        );
        outcome
    }

    /// Fetch from one source, converting panics and timeouts into errors.
    async fn guarded_fetch(
        &self,
        source: &dyn ListingSource,
        params: &SearchParams,
    ) -> (Result<SourceBatch>, Duration) {
        let provider = source.provider();
        let started = Instant::now();
        let guarded = AssertUnwindSafe(source.fetch(params)).catch_unwind();

        let result = match tokio::time::timeout(self.source_timeout, guarded).await {
            Ok(Ok(result)) => result.and_then(|batch| {
                if batch.provider == provider {
                    Ok(batch)
                } else {
                    Err(AppError::validation(format!(
                        "{} source returned a batch tagged {}",
                        provider, batch.provider
                    )))
                }
            }),
            Ok(Err(_)) => Err(AppError::SourcePanicked { provider }),
            Err(_) => Err(AppError::SourceTimeout {
                provider,
                timeout_secs: self.source_timeout.as_secs(),
            }),
        };
        (result, started.elapsed())
    }
}
