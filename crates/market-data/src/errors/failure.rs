use std::fmt;

use serde::Serialize;

/// Tagged reason a provider fetch failed.
///
/// The dashboard renders every failure the same way (`Error`), so this is
/// informational: it travels on the quote record and into the JSON payload.
///
/// | Kind | Raised for |
/// |------|------------|
/// | `NotFound` | unknown symbol |
/// | `NoData` | symbol known, empty range |
/// | `Timeout` | provider call timed out |
/// | `RateLimited` | provider answered 429 |
/// | `Malformed` | response could not be interpreted |
/// | `Network` | provider unreachable |
/// | `Provider` | anything else the provider reported |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    NoData,
    Timeout,
    RateLimited,
    Malformed,
    Network,
    Provider,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::NoData => "no_data",
            Self::Timeout => "timeout",
            Self::RateLimited => "rate_limited",
            Self::Malformed => "malformed",
            Self::Network => "network",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
