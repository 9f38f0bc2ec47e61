use std::fmt;

use serde::Serialize;

const ASX_SUFFIX: &str = ".AX";

/// Home market of a symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Australian Securities Exchange (Yahoo `.AX` suffix)
    Asx,
    /// Everything else
    Us,
}

impl Region {
    /// Classify a provider symbol by its exchange suffix.
    ///
    /// ```
    /// use tickerboard_market_data::Region;
    ///
    /// assert_eq!(Region::from_symbol("BHP.AX"), Region::Asx);
    /// assert_eq!(Region::from_symbol("AAPL"), Region::Us);
    /// ```
    pub fn from_symbol(symbol: &str) -> Self {
        let bytes = symbol.trim().as_bytes();
        let has_suffix = bytes.len() >= ASX_SUFFIX.len()
            && bytes[bytes.len() - ASX_SUFFIX.len()..].eq_ignore_ascii_case(ASX_SUFFIX.as_bytes());
        if has_suffix {
            Region::Asx
        } else {
            Region::Us
        }
    }

    /// Lowercase tag, also used as a CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Asx => "asx",
            Region::Us => "us",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Asx => "ASX",
            Region::Us => "US",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
