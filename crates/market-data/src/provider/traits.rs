//! Market data provider trait definitions.
//!
//! This module defines the `MarketDataProvider` trait the normalizer
//! fetches price series through.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PricePoint;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// Both series are returned ordered by timestamp ascending. An empty
/// series is a valid answer and must not be reported as an error.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerboard_market_data::{MarketDataError, MarketDataProvider, PricePoint};
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement the two series methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error messages.
    fn id(&self) -> &'static str;

    /// Minute bars for the current or latest trading session.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The provider-specific symbol (e.g., "AAPL", "BHP.AX")
    async fn intraday_closes(&self, symbol: &str) -> Result<Vec<PricePoint>, MarketDataError>;

    /// Daily bars covering at least the last two sessions.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The provider-specific symbol (e.g., "AAPL", "BHP.AX")
    async fn daily_closes(&self, symbol: &str) -> Result<Vec<PricePoint>, MarketDataError>;
}
