use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{Region, WatchlistEntry};

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown region filter '{0}': expected all, asx or us")]
pub struct UnknownRegionFilter(pub String);

/// Region restriction applied before any provider call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    pub fn admits(&self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(wanted) => *wanted == region,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionFilter::All => "all",
            RegionFilter::Only(region) => region.as_str(),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = UnknownRegionFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("all") || value.is_empty() {
            Ok(RegionFilter::All)
        } else if value.eq_ignore_ascii_case("asx") {
            Ok(RegionFilter::Only(Region::Asx))
        } else if value.eq_ignore_ascii_case("us") {
            Ok(RegionFilter::Only(Region::Us))
        } else {
            Err(UnknownRegionFilter(s.to_string()))
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text query plus region restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchlistFilter {
    query: Option<String>,
    region: RegionFilter,
}

impl WatchlistFilter {
    /// A blank query matches everything.
    pub fn new(query: Option<&str>, region: RegionFilter) -> Self {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        Self { query, region }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn region(&self) -> RegionFilter {
        self.region
    }

    /// Case-insensitive substring match on name or symbol, within the region.
    pub fn matches(&self, entry: &WatchlistEntry) -> bool {
        if !self.region.admits(entry.region()) {
            return false;
        }
        match &self.query {
            None => true,
            Some(query) => {
                entry.name.to_lowercase().contains(query.as_str())
                    || entry.symbol.to_lowercase().contains(query.as_str())
            }
        }
    }
}
