//! The seam between the aggregator and anything that produces listings.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Provider, SearchParams, SourceBatch};

/// A source of listings for one provider.
///
/// Implementations are expected to absorb their own upstream failures; an
/// `Err` is still tolerated by the aggregator and counts as zero listings.
#[async_trait]
pub trait ListingSource: Send + Sync {
    fn provider(&self) -> Provider;

    async fn fetch(&self, params: &SearchParams) -> Result<SourceBatch>;
}
