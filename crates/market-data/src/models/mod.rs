//! Market data models
//!
//! This module contains the core data types of the dashboard:
//! - `watchlist` - Tracked symbols and their display names (Watchlist, WatchlistEntry)
//! - `region` - Home market classification derived from the symbol (Region)
//! - `price_point` - One bar of a provider price series (PricePoint)
//! - `quote_record` - Normalized display record (QuoteRecord, PriceState, PercentChange, Trend)

mod price_point;
mod quote_record;
mod region;
mod watchlist;

pub use price_point::{last_close, previous_close, PricePoint};
pub use quote_record::{PercentChange, PriceState, QuoteRecord, Trend};
pub use region::Region;
pub use watchlist::{Watchlist, WatchlistEntry, WatchlistError, DEFAULT_WATCHLIST};
