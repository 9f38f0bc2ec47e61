use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{QuoteRecord, WatchlistEntry};

/// Quote records keyed by display name, in watchlist order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteBoard {
    rows: Vec<(WatchlistEntry, QuoteRecord)>,
}

impl QuoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: WatchlistEntry, record: QuoteRecord) {
        self.rows.push((entry, record));
    }

    pub fn get(&self, name: &str) -> Option<&QuoteRecord> {
        self.rows
            .iter()
            .find(|(entry, _)| entry.name == name)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WatchlistEntry, &QuoteRecord)> {
        self.rows.iter().map(|(entry, record)| (entry, record))
    }

    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|(entry, _)| entry.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Serialize for QuoteBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (entry, record) in &self.rows {
            map.serialize_entry(&entry.name, record)?;
        }
        map.end()
    }
}
