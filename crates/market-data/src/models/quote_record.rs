use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::region::Region;
use crate::errors::FailureKind;

const NOT_AVAILABLE: &str = "N/A";
const ERROR: &str = "Error";

/// Current price of a symbol, or the reason there is none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceState {
    /// Last intraday close, rounded to cents
    Value(Decimal),
    /// Provider answered but had no intraday bars
    NotAvailable,
    /// Provider call failed
    Error,
}

impl fmt::Display for PriceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceState::Value(v) => write!(f, "{:.2}", v),
            PriceState::NotAvailable => f.write_str(NOT_AVAILABLE),
            PriceState::Error => f.write_str(ERROR),
        }
    }
}

// Numbers stay numbers on the wire; sentinels become strings.
impl Serialize for PriceState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PriceState::Value(v) => Serialize::serialize(v, serializer),
            PriceState::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
            PriceState::Error => serializer.serialize_str(ERROR),
        }
    }
}

/// Day-over-day change in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PercentChange {
    Value(Decimal),
    NotAvailable,
}

/// Always signed with two decimals: `+5.00%`, `-0.42%`, `+0.00%`, or `N/A`.
///
/// The sign follows the unrounded value, so a tiny loss reads `-0.00%`.
impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::Value(v) => {
                let sign = if v.is_sign_negative() && !v.is_zero() {
                    '-'
                } else {
                    '+'
                };
                write!(f, "{}{:.2}%", sign, v.abs().round_dp(2))
            }
            PercentChange::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for PercentChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Direction of the day-over-day change, used for coloring.
///
/// `Flat` covers both "unchanged" and "unknown".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Direction of `diff`.
    pub fn from_diff(diff: Decimal) -> Self {
        if diff.is_sign_positive() && !diff.is_zero() {
            Trend::Up
        } else if diff.is_sign_negative() && !diff.is_zero() {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized, display-ready view of one symbol.
///
/// Recomputed from scratch on every request; never updated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuoteRecord {
    pub symbol: String,
    pub price: PriceState,
    pub previous_close: Option<Decimal>,
    pub percent_change: PercentChange,
    pub trend: Trend,
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}
