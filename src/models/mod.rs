// src/models/mod.rs

//! Domain models for the aggregation pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod listing;
mod provider;
mod search;

// Re-export all public types
pub use config::{
    Config, HttpConfig, OutputConfig, ProviderConfig, ProvidersConfig, ScoringConfig, SearchConfig,
};
pub use listing::{Listing, ListingDetails, MAX_MATCH_SCORE, MIN_MATCH_SCORE, MatchScore};
pub use provider::Provider;
pub(crate) use search::non_blank;
pub use search::{Origin, SearchOutcome, SearchParams, SourceBatch, SourceReport};
