//! Library layer for HOCR historical results: time normalization, order
//! statistics, and the RegattaCentral result pipeline.
//!
//! Wraps the `regattacentral_api` client with event-id resolution from the
//! results-listing page, a per-year page cache, and per-year aggregation.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod finish_order;
pub mod resolver;
pub mod stats;
pub mod time;

pub use regattacentral_api;
pub use regattacentral_api::types;
pub use regattacentral_api::Client;

pub use aggregate::{
    collect_event_history, collect_histories, EventHistory, FetchOutcome, MissingYear,
};
pub use cache::PageCache;
pub use config::{EventCategory, RegattaConfig};
pub use error::HocrError;
pub use fetcher::{ResultsFetcher, ResultsSource};
pub use finish_order::finishing_times;
pub use resolver::{find_event_id, EventResolver, PageEventResolver};
pub use stats::{check_fraction, percentile_cutoff, summarize, winner, Cutoff, YearSummary};
pub use time::Time;
