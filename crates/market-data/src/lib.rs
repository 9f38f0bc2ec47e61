//! Tickerboard Market Data Crate
//!
//! This crate turns raw provider price series into display-ready quote
//! records for the Tickerboard dashboard.
//!
//! # Overview
//!
//! - A fixed, injected watchlist of display names and provider symbols
//! - Provider-agnostic series fetching (Yahoo Finance, in-memory fixtures)
//! - Price normalization: current price, previous close, percent change, trend
//! - Filtering by free-text query and region before any provider call
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    Watchlist     | --> | WatchlistFilter  |  (query + region)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Yahoo, fixture)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | PriceNormalizer  |  (snapshot -> record)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   QuoteBoard     |  (name -> QuoteRecord)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Watchlist`] - Ordered display name / symbol pairs
//! - [`PricePoint`] - One bar of a provider series
//! - [`QuoteRecord`] - Normalized price, change, trend and region of a symbol
//! - [`PriceNormalizer`] - Fetches series and derives records
//! - [`MarketDataError`] / [`FailureKind`] - Typed fetch failures

pub mod errors;
pub mod models;
pub mod normalizer;
pub mod provider;

pub use errors::{FailureKind, MarketDataError};

// Re-export all public types from models
pub use models::{
    PercentChange, PricePoint, PriceState, QuoteRecord, Region, Trend, Watchlist, WatchlistEntry,
    WatchlistError, DEFAULT_WATCHLIST,
};

// Re-export normalizer types
pub use normalizer::{
    derive_record, PriceNormalizer, PriceSnapshot, QuoteBoard, RegionFilter, UnknownRegionFilter,
    WatchlistFilter,
};

// Re-export provider types
pub use provider::fixture::FixtureProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
