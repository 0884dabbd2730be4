//! Service layer for the aggregation pipeline.
//!
//! This module contains the business logic for:
//! - Outbound requests (`Transport`, `HttpTransport`)
//! - Per-provider adapters (`BoardAdapter` with one `BoardSchema` per board)
//! - Heuristic scoring (`MatchScorer`)
//! - Fan-out/fan-in ranking (`Aggregator`)

pub mod aggregator;
pub mod boards;
pub mod scorer;
pub mod source;
pub mod transport;

pub use aggregator::Aggregator;
pub use boards::{AdapterSettings, BoardAdapter, BoardSchema, Internshala, LinkedIn, Naukri};
pub use scorer::MatchScorer;
pub use source::ListingSource;
pub use transport::{HttpTransport, Transport, UpstreamRequest, UpstreamResponse};
