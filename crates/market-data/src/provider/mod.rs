//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance provider used in production
//! - An in-memory fixture provider serving canned series

mod traits;

pub mod fixture;
pub mod yahoo;

// Re-exports
pub use traits::MarketDataProvider;
