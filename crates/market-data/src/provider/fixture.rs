//! In-memory provider serving canned series.
//!
//! Lets the normalizer and the HTTP layer run against fixture data instead of
//! live provider calls. Every request is recorded so callers can assert on
//! which symbols were actually fetched.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::errors::{FailureKind, MarketDataError};
use crate::models::PricePoint;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "FIXTURE";

#[derive(Clone, Debug)]
enum Canned {
    Series {
        intraday: Vec<PricePoint>,
        daily: Vec<PricePoint>,
    },
    Failure(FailureKind),
}

/// Which series a recorded call asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Intraday,
    Daily,
}

#[derive(Default)]
pub struct FixtureProvider {
    symbols: HashMap<String, Canned>,
    calls: Mutex<Vec<(SeriesKind, String)>>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the given closes for `symbol`. Bars are one minute apart for the
    /// intraday series and one day apart for the daily series.
    pub fn with_closes(mut self, symbol: &str, intraday: &[Decimal], daily: &[Decimal]) -> Self {
        let canned = Canned::Series {
            intraday: synthetic_series(intraday, Duration::minutes(1)),
            daily: synthetic_series(daily, Duration::days(1)),
        };
        self.symbols.insert(symbol.to_string(), canned);
        self
    }

    /// Fail every request for `symbol` with an error of the given kind.
    pub fn with_failure(mut self, symbol: &str, kind: FailureKind) -> Self {
        self.symbols
            .insert(symbol.to_string(), Canned::Failure(kind));
        self
    }

    /// Every request served so far, in order.
    pub fn calls(&self) -> Vec<(SeriesKind, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Symbols requested so far, one entry per request.
    pub fn requested_symbols(&self) -> Vec<String> {
        self.calls().into_iter().map(|(_, symbol)| symbol).collect()
    }

    fn serve(&self, kind: SeriesKind, symbol: &str) -> Result<Vec<PricePoint>, MarketDataError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((kind, symbol.to_string()));
        }

        match self.symbols.get(symbol) {
            Some(Canned::Series { intraday, daily }) => Ok(match kind {
                SeriesKind::Intraday => intraday.clone(),
                SeriesKind::Daily => daily.clone(),
            }),
            Some(Canned::Failure(failure)) => Err(error_for(*failure, symbol)),
            None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        }
    }
}

#[async_trait]
impl MarketDataProvider for FixtureProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn intraday_closes(&self, symbol: &str) -> Result<Vec<PricePoint>, MarketDataError> {
        self.serve(SeriesKind::Intraday, symbol)
    }

    async fn daily_closes(&self, symbol: &str) -> Result<Vec<PricePoint>, MarketDataError> {
        self.serve(SeriesKind::Daily, symbol)
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn synthetic_series(closes: &[Decimal], step: Duration) -> Vec<PricePoint> {
    let start = base_time();
    closes
        .iter()
        .zip(0i32..)
        .map(|(close, i)| PricePoint::new(start + step * i, *close))
        .collect()
}

fn error_for(kind: FailureKind, symbol: &str) -> MarketDataError {
    let provider = PROVIDER_ID.to_string();
    match kind {
        FailureKind::NotFound => MarketDataError::SymbolNotFound(symbol.to_string()),
        FailureKind::NoData => MarketDataError::NoDataForRange,
        FailureKind::Timeout => MarketDataError::Timeout { provider },
        FailureKind::RateLimited => MarketDataError::RateLimited { provider },
        FailureKind::Malformed => MarketDataError::ValidationFailed {
            message: format!("unreadable response for {}", symbol),
        },
        FailureKind::Network => MarketDataError::Network {
            provider,
            message: "connection refused".to_string(),
        },
        FailureKind::Provider => MarketDataError::ProviderError {
            provider,
            message: format!("internal error for {}", symbol),
        },
    }
}
