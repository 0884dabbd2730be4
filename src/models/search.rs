//! Search parameters and aggregation outcomes.

use serde::{Deserialize, Serialize};

use super::{Listing, Provider};

/// Caller-supplied search parameters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    /// Restrict the search to a single provider
    #[serde(default, alias = "platform")]
    pub provider: Option<Provider>,
}

impl SearchParams {
    /// Result limit, falling back to `default` when unset or zero.
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.filter(|&l| l > 0).unwrap_or(default)
    }

    /// Whether the given provider should be queried.
    pub fn includes(&self, provider: Provider) -> bool {
        self.provider.is_none_or(|p| p == provider)
    }
}

/// Trim a search field, treating blank strings as absent.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// How a provider's slice of the results was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Normalized from the provider's live response
    Live,
    /// Upstream failed; the provider's built-in sample set was served
    Fallback,
    /// The source failed outright and contributed nothing
    Unavailable,
}

/// Listings produced by one source.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub provider: Provider,
    pub origin: Origin,
    pub listings: Vec<Listing>,
}

impl SourceBatch {
    pub fn live(provider: Provider, listings: Vec<Listing>) -> Self {
        Self {
            provider,
            origin: Origin::Live,
            listings,
        }
    }

    pub fn fallback(provider: Provider, listings: Vec<Listing>) -> Self {
        Self {
            provider,
            origin: Origin::Fallback,
            listings,
        }
    }
}

/// Per-source summary of an aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub provider: Provider,
    pub origin: Origin,
    pub count: usize,
    pub elapsed_ms: u64,
}

/// Ranked listings plus a report for each queried source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub listings: Vec<Listing>,
    pub sources: Vec<SourceReport>,
}

impl SearchOutcome {
    /// Whether any listing came from something other than a live response.
    pub fn is_degraded(&self) -> bool {
        self.sources.iter().any(|s| s.origin != Origin::Live)
    }
}
