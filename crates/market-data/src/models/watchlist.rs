use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::region::Region;

/// Built-in watchlist used when none is configured.
pub const DEFAULT_WATCHLIST: &[(&str, &str)] = &[
    ("BHP (ASX)", "BHP.AX"),
    ("CBA (ASX)", "CBA.AX"),
    ("RIO (ASX)", "RIO.AX"),
    ("Apple (US)", "AAPL"),
    ("Tesla (US)", "TSLA"),
    ("Microsoft (US)", "MSFT"),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WatchlistError {
    #[error("Malformed watchlist entry '{0}': expected Name=SYMBOL")]
    Malformed(String),

    #[error("Watchlist entry '{0}' has an empty name or symbol")]
    EmptyField(String),

    #[error("Duplicate watchlist name: {0}")]
    DuplicateName(String),

    #[error("Watchlist is empty")]
    Empty,
}

/// A display name paired with the provider symbol it tracks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WatchlistEntry {
    pub name: String,
    pub symbol: String,
}

impl WatchlistEntry {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    pub fn region(&self) -> Region {
        Region::from_symbol(&self.symbol)
    }
}

/// Ordered, immutable set of tracked symbols.
///
/// Names are unique because they key the rendered board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new(entries: Vec<WatchlistEntry>) -> Result<Self, WatchlistError> {
        if entries.is_empty() {
            return Err(WatchlistError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() || entry.symbol.trim().is_empty() {
                return Err(WatchlistError::EmptyField(format!(
                    "{}={}",
                    entry.name, entry.symbol
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(WatchlistError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WatchlistEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        Self {
            entries: DEFAULT_WATCHLIST
                .iter()
                .map(|(name, symbol)| WatchlistEntry::new(*name, *symbol))
                .collect(),
        }
    }
}

/// Parses `Name=SYMBOL` pairs separated by `;`.
///
/// ```
/// use tickerboard_market_data::Watchlist;
///
/// let watchlist: Watchlist = "Apple (US)=AAPL; BHP (ASX)=BHP.AX".parse().unwrap();
/// assert_eq!(watchlist.len(), 2);
/// assert_eq!(watchlist.entries()[1].symbol, "BHP.AX");
/// ```
impl FromStr for Watchlist {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        for pair in s.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            // Symbols never contain '=', names may.
            let (name, symbol) = pair
                .rsplit_once('=')
                .ok_or_else(|| WatchlistError::Malformed(pair.to_string()))?;
            let (name, symbol) = (name.trim(), symbol.trim());
            if name.is_empty() || symbol.is_empty() {
                return Err(WatchlistError::EmptyField(pair.to_string()));
            }
            entries.push(WatchlistEntry::new(name, symbol));
        }
        Watchlist::new(entries)
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a WatchlistEntry;
    type IntoIter = std::slice::Iter<'a, WatchlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_watchlist_order() {
        let watchlist = Watchlist::default();
        let names: Vec<&str> = watchlist.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "BHP (ASX)",
                "CBA (ASX)",
                "RIO (ASX)",
                "Apple (US)",
                "Tesla (US)",
                "Microsoft (US)"
            ]
        );
        assert_eq!(watchlist.entries()[0].region(), Region::Asx);
        assert_eq!(watchlist.entries()[3].region(), Region::Us);
    }

    #[test]
    fn test_parse_trims_and_skips_blank_pairs() {
        let watchlist: Watchlist = " Tesla (US) = TSLA ;; RIO (ASX)=RIO.AX; ".parse().unwrap();
        assert_eq!(
            watchlist.entries(),
            &[
                WatchlistEntry::new("Tesla (US)", "TSLA"),
                WatchlistEntry::new("RIO (ASX)", "RIO.AX"),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "AAPL".parse::<Watchlist>(),
            Err(WatchlistError::Malformed("AAPL".to_string()))
        );
        assert_eq!(
            "Apple=".parse::<Watchlist>(),
            Err(WatchlistError::EmptyField("Apple=".to_string()))
        );
        assert_eq!(
            "A=AAPL;A=MSFT".parse::<Watchlist>(),
            Err(WatchlistError::DuplicateName("A".to_string()))
        );
        assert_eq!(" ; ".parse::<Watchlist>(), Err(WatchlistError::Empty));
    }
}
