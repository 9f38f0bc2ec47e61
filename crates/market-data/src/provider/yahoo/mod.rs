//! Yahoo Finance market data provider.
//!
//! Fetches close series for equities on any exchange Yahoo covers
//! (e.g., AAPL, BHP.AX) through the chart endpoint.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::PricePoint;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Minute bars over the latest session.
const INTRADAY_INTERVAL: &str = "1m";
const INTRADAY_RANGE: &str = "1d";

/// Daily bars over the last two sessions.
const DAILY_INTERVAL: &str = "1d";
const DAILY_RANGE: &str = "2d";

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert a Yahoo bar to our PricePoint model.
    fn yahoo_quote_to_point(yahoo_quote: &yahoo::Quote) -> Result<PricePoint, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        let close = Decimal::from_f64_retain(yahoo_quote.close).ok_or_else(|| {
            MarketDataError::ValidationFailed {
                message: format!(
                    "Failed to convert close price {} to Decimal",
                    yahoo_quote.close
                ),
            }
        })?;

        Ok(PricePoint::new(timestamp, close))
    }

    /// Fetch one chart series and convert it, skipping unusable bars.
    async fn fetch_series(
        &self,
        symbol: &str,
        interval: &str,
        range: &str,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        debug!(
            "Fetching {} bars over {} for {} from Yahoo",
            interval, range, symbol
        );

        // NoQuotes means no trades in the range yet: an empty series, not a failure.
        let response = match self
            .connector
            .get_quote_range(symbol, interval, range)
            .await
        {
            Ok(response) => response,
            Err(yahoo::YahooError::NoQuotes) => return Ok(vec![]),
            Err(e) => return Err(map_yahoo_error(symbol, e)),
        };

        let yahoo_quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(yahoo::YahooError::NoQuotes) => return Ok(vec![]),
            Err(e) => return Err(map_yahoo_error(symbol, e)),
        };

        let mut points: Vec<PricePoint> = yahoo_quotes
            .iter()
            .filter_map(|q| match Self::yahoo_quote_to_point(q) {
                Ok(point) => Some(point),
                Err(e) => {
                    warn!("Skipping {} bar for {}: {}", interval, symbol, e);
                    None
                }
            })
            .collect();
        points.sort_by_key(|p| p.timestamp);

        Ok(points)
    }
}

fn map_yahoo_error(symbol: &str, error: yahoo::YahooError) -> MarketDataError {
    match error {
        yahoo::YahooError::NoResult => MarketDataError::SymbolNotFound(symbol.to_string()),
        yahoo::YahooError::NoQuotes => MarketDataError::NoDataForRange,
        yahoo::YahooError::TooManyRequests(_) => MarketDataError::RateLimited {
            provider: PROVIDER_ID.to_string(),
        },
        yahoo::YahooError::ConnectionFailed(source) if source.is_timeout() => MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        },
        e @ (yahoo::YahooError::ConnectionFailed(_) | yahoo::YahooError::NoResponse) => {
            MarketDataError::Network {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }
        }
        e @ (yahoo::YahooError::DeserializeFailed(_)
        | yahoo::YahooError::DeserializeFailedDebug(_)
        | yahoo::YahooError::DataInconsistency) => MarketDataError::ValidationFailed {
            message: e.to_string(),
        },
        other => MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn intraday_closes(&self, symbol: &str) -> Result<Vec<PricePoint>, MarketDataError> {
        self.fetch_series(symbol, INTRADAY_INTERVAL, INTRADAY_RANGE)
            .await
    }

    async fn daily_closes(&self, symbol: &str) -> Result<Vec<PricePoint>, MarketDataError> {
        self.fetch_series(symbol, DAILY_INTERVAL, DAILY_RANGE).await
    }
}

// ============================================================================
// Tests
// ============================================================================
