//! Price normalization.
//!
//! Turns the two raw series a provider returns for a symbol (intraday minute
//! bars and daily bars) into a display-ready [`QuoteRecord`]:
//!
//! ```text
//! intraday series --last close-->   current price  --+
//!                                                    +--> diff, percent, trend
//! daily series ----second to last--> previous close -+
//! ```
//!
//! The fetch step returns a typed `Result`; [`derive_record`] then collapses
//! any failure into the `Error` sentinel so a single bad symbol never breaks
//! the board.

mod board;
mod filter;

pub use board::QuoteBoard;
pub use filter::{RegionFilter, UnknownRegionFilter, WatchlistFilter};

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{
    last_close, previous_close, PercentChange, PriceState, QuoteRecord, Region, Trend, Watchlist,
};
use crate::provider::MarketDataProvider;

/// Display precision for prices.
const PRICE_DP: u32 = 2;

/// Prices pulled from one provider round trip, already rounded to cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriceSnapshot {
    /// Last intraday close; `None` when the intraday series was empty
    pub current_price: Option<Decimal>,
    /// Second-to-last daily close; `None` with fewer than two daily bars
    pub previous_close: Option<Decimal>,
}

/// Derives quote records for the injected watchlist from a provider.
///
/// Holds no mutable state: every call fetches fresh series.
pub struct PriceNormalizer {
    provider: Arc<dyn MarketDataProvider>,
    watchlist: Watchlist,
}

impl PriceNormalizer {
    pub fn new(provider: Arc<dyn MarketDataProvider>, watchlist: Watchlist) -> Self {
        Self {
            provider,
            watchlist,
        }
    }

    /// Fetch both series for `symbol` and reduce them to a snapshot.
    pub async fn snapshot(&self, symbol: &str) -> Result<PriceSnapshot, MarketDataError> {
        debug!("Fetching price series for {} from {}", symbol, self.provider.id());

        let intraday = self.provider.intraday_closes(symbol).await?;
        let daily = self.provider.daily_closes(symbol).await?;

        Ok(PriceSnapshot {
            current_price: last_close(&intraday).map(|p| p.round_dp(PRICE_DP)),
            previous_close: previous_close(&daily).map(|p| p.round_dp(PRICE_DP)),
        })
    }

    /// Normalize a single symbol. Never fails; provider errors become the
    /// `Error` sentinel on the record.
    pub async fn normalize(&self, symbol: &str) -> QuoteRecord {
        let outcome = self.snapshot(symbol).await;
        if let Err(e) = &outcome {
            warn!("Price fetch failed for {}: {}", symbol, e);
        }
        derive_record(symbol, outcome)
    }

    /// Normalize every watchlist entry the filter admits, in watchlist order.
    ///
    /// Entries are filtered before any provider call and fetched one at a time.
    pub async fn board(&self, filter: &WatchlistFilter) -> QuoteBoard {
        let mut board = QuoteBoard::new();
        for entry in self.watchlist.iter().filter(|e| filter.matches(e)) {
            let record = self.normalize(&entry.symbol).await;
            board.push(entry.clone(), record);
        }
        debug!(
            "Normalized {} of {} watchlist entries",
            board.len(),
            self.watchlist.len()
        );
        board
    }
}

/// Build the display record for `symbol` from a fetch outcome.
///
/// - no current price: `NotAvailable`, percent `N/A`, `Flat`
/// - no (or zero) previous close: percent `N/A`, `Flat`
/// - both present: signed percent change, trend from the sign of the difference
/// - any error: `Error`, percent `N/A`, `Flat`, with the failure kind attached
pub fn derive_record(symbol: &str, outcome: Result<PriceSnapshot, MarketDataError>) -> QuoteRecord {
    let region = Region::from_symbol(symbol);

    let snapshot = match outcome {
        Ok(snapshot) => snapshot,
        Err(e) => {
            return QuoteRecord {
                symbol: symbol.to_string(),
                price: PriceState::Error,
                previous_close: None,
                percent_change: PercentChange::NotAvailable,
                trend: Trend::Flat,
                region,
                failure: Some(e.failure_kind()),
            };
        }
    };

    let price = match snapshot.current_price {
        Some(p) => PriceState::Value(p),
        None => PriceState::NotAvailable,
    };

    let (percent_change, trend) = match (snapshot.current_price, snapshot.previous_close) {
        (Some(current), Some(prev)) if !prev.is_zero() => {
            let diff = current - prev;
            let percent = diff / prev * Decimal::ONE_HUNDRED;
            (PercentChange::Value(percent), Trend::from_diff(diff))
        }
        _ => (PercentChange::NotAvailable, Trend::Flat),
    };

    QuoteRecord {
        symbol: symbol.to_string(),
        price,
        previous_close: snapshot.previous_close,
        percent_change,
        trend,
        region,
        failure: None,
    }
}
