//! Job-board adapters.
//!
//! Every provider shares the same request/normalize/fallback flow in
//! `BoardAdapter`; what differs per provider (endpoint, query names, field
//! names, defaults, sample data) lives in a `BoardSchema`.

mod internshala;
mod linkedin;
mod naukri;

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::FutureExt;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{
    Config, Listing, ListingDetails, MatchScore, Provider, SearchParams, SourceBatch,
};
use crate::services::scorer::MatchScorer;
use crate::services::source::ListingSource;
use crate::services::transport::{Transport, UpstreamRequest};
use crate::utils::{build_endpoint, http::is_success, record};

pub use internshala::Internshala;
pub use linkedin::LinkedIn;
pub use naukri::Naukri;

/// One built-in sample listing served when the provider is unreachable.
pub struct Sample {
    pub local_id: &'static str,
    pub score: i64,
    pub details: ListingDetails,
}

/// Provider-specific wire mapping.
pub trait BoardSchema: Send + Sync {
    fn provider(&self) -> Provider;

    /// Resource path appended to the provider base URL.
    fn resource_path(&self) -> &'static str;

    /// Top-level payload key holding the record array.
    fn records_key(&self) -> &'static str;

    /// Query pairs for the request. Absent search fields are omitted.
    fn query(&self, params: &SearchParams, limit: usize) -> Vec<(&'static str, String)>;

    /// Headers beyond auth and `Accept`.
    fn extra_headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Skill list exactly as the record carries it, before defaults.
    fn raw_skills(&self, record: &Value) -> Vec<String>;

    /// Map one record, filling missing fields with provider defaults.
    fn details(&self, record: &Value, local_id: &str, now: DateTime<Utc>) -> ListingDetails;

    /// Fixed sample set, never empty.
    fn samples(&self) -> Vec<Sample>;
}

/// Endpoint and credential settings for an adapter.
#[derive(Debug, Clone)]
pub struct AdapterSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub default_limit: usize,
    /// Budget for one live fetch, after which the samples are served
    pub request_timeout: Duration,
}

impl AdapterSettings {
    /// Resolve settings for a provider from configuration and environment.
    pub fn from_config(config: &Config, provider: Provider) -> Self {
        let provider_config = config.provider(provider);
        Self {
            base_url: provider_config.base_url_for(provider),
            api_key: provider_config.resolve_api_key(provider),
            default_limit: config.search.default_limit,
            request_timeout: Duration::from_secs(config.http.timeout_secs),
        }
    }
}

/// Fetches and normalizes listings for one provider.
pub struct BoardAdapter<S> {
    schema: S,
    settings: AdapterSettings,
    transport: Arc<dyn Transport>,
    scorer: Arc<MatchScorer>,
}

impl<S: BoardSchema> BoardAdapter<S> {
    /// Create an adapter for `schema`.
    pub fn new(
        schema: S,
        settings: AdapterSettings,
        transport: Arc<dyn Transport>,
        scorer: Arc<MatchScorer>,
    ) -> Self {
        Self {
            schema,
            settings,
            transport,
            scorer,
        }
    }

    /// Build the outbound request for a search.
    pub fn request(&self, params: &SearchParams) -> Result<UpstreamRequest> {
        let provider = self.schema.provider();
        let bearer_token = self
            .settings
            .api_key
            .clone()
            .ok_or(AppError::MissingCredential { provider })?;
        let limit = params.limit_or(self.settings.default_limit);
        let query = self.schema.query(params, limit);
        let url = build_endpoint(&self.settings.base_url, self.schema.resource_path(), &query)?;

        Ok(UpstreamRequest {
            provider,
            url,
            bearer_token,
            headers: self.schema.extra_headers(),
        })
    }

    /// Query the provider and normalize its answer.
    async fn fetch_live(&self, params: &SearchParams) -> Result<Vec<Listing>> {
        let request = self.request(params)?;
        let response = self.transport.get(&request).await?;
        if !is_success(response.status) {
            return Err(AppError::Upstream {
                provider: self.schema.provider(),
                status: response.status,
            });
        }
        let limit = params.limit_or(self.settings.default_limit);
        self.normalize_payload(&response.body, limit, Utc::now())
    }

    /// Normalize a raw response body into at most `limit` listings.
    ///
    /// Fails only when the payload as a whole is unusable; individual
    /// records with missing fields get provider defaults, and records that
    /// are not JSON objects are skipped.
    pub fn normalize_payload(
        &self,
        body: &str,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<Listing>> {
        let provider = self.schema.provider();
        let payload: Value = serde_json::from_str(body)?;
        let key = self.schema.records_key();
        let records = payload
            .get(key)
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::malformed(provider, format!("missing '{key}' array")))?;

        let listings: Vec<Listing> = records
            .iter()
            .enumerate()
            .filter(|(index, record)| {
                let usable = record.is_object();
                if !usable {
                    log::debug!("Skipping non-object {} record #{}", provider, index);
                }
                usable
            })
            .take(limit)
            .map(|(index, record)| self.normalize_record(record, index, now))
            .collect();

        log::debug!(
            "{}: normalized {} of {} records",
            provider,
            listings.len(),
            records.len()
        );
        Ok(listings)
    }

    fn normalize_record(&self, record: &Value, index: usize, now: DateTime<Utc>) -> Listing {
        let local_id = record::local_id(record, index);
        let score = self.scorer.score(&self.schema.raw_skills(record));
        let details = self.schema.details(record, &local_id, now);
        Listing::new(self.schema.provider(), &local_id, details, score)
    }

    /// The provider's built-in sample listings.
    pub fn fallback_listings(&self) -> Vec<Listing> {
        let provider = self.schema.provider();
        self.schema
            .samples()
            .into_iter()
            .map(|s| Listing::new(provider, s.local_id, s.details, MatchScore::clamped(s.score)))
            .collect()
    }
}

#[async_trait]
impl<S: BoardSchema> ListingSource for BoardAdapter<S> {
    fn provider(&self) -> Provider {
        self.schema.provider()
    }

    /// Live listings, or the samples on any error, panic or timeout.
    async fn fetch(&self, params: &SearchParams) -> Result<SourceBatch> {
        let provider = self.schema.provider();
        let budget = self.settings.request_timeout;
        let live = AssertUnwindSafe(self.fetch_live(params)).catch_unwind();

        let error = match tokio::time::timeout(budget, live).await {
            Ok(Ok(Ok(listings))) => return Ok(SourceBatch::live(provider, listings)),
            Ok(Ok(Err(error))) => error,
            Ok(Err(_)) => AppError::SourcePanicked { provider },
            Err(_) => AppError::SourceTimeout {
                provider,
                timeout_secs: budget.as_secs(),
            },
        };
        log::warn!("{} unavailable, serving sample listings: {}", provider, error);
        Ok(SourceBatch::fallback(provider, self.fallback_listings()))
    }
}

/// Build the enabled built-in adapters from configuration.
pub fn sources_from_config(
    config: &Config,
    transport: Arc<dyn Transport>,
) -> Vec<Arc<dyn ListingSource>> {
    let scorer = Arc::new(MatchScorer::new(&config.scoring));
    config
        .enabled_providers()
        .into_iter()
        .map(|provider| {
            let settings = AdapterSettings::from_config(config, provider);
            let transport = Arc::clone(&transport);
            let scorer = Arc::clone(&scorer);
            let source: Arc<dyn ListingSource> = match provider {
                Provider::LinkedIn => {
                    Arc::new(BoardAdapter::new(LinkedIn, settings, transport, scorer))
                }
                Provider::Naukri => Arc::new(BoardAdapter::new(Naukri, settings, transport, scorer)),
                Provider::Internshala => {
                    Arc::new(BoardAdapter::new(Internshala, settings, transport, scorer))
                }
            };
            source
        })
        .collect()
}
