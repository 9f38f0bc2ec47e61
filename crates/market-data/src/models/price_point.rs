use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bar of a provider price series.
///
/// Only the close is kept; the dashboard never looks at open/high/low.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Bar timestamp (start of the interval)
    pub timestamp: DateTime<Utc>,

    /// Closing price for the interval
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: Decimal) -> Self {
        Self { timestamp, close }
    }
}

/// Close of the last bar in a series ordered by timestamp ascending.
pub fn last_close(series: &[PricePoint]) -> Option<Decimal> {
    series.last().map(|p| p.close)
}

/// Close of the bar before the last one, i.e. the previous session for a
/// daily series.
pub fn previous_close(series: &[PricePoint]) -> Option<Decimal> {
    if series.len() < 2 {
        return None;
    }
    series.get(series.len() - 2).map(|p| p.close)
}
