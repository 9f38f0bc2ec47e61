//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum returned by providers and the normalizer
//! - [`FailureKind`]: The tagged reason kept on a quote record when a fetch fails

mod failure;

pub use failure::FailureKind;

use thiserror::Error;

/// Errors that can occur while fetching price series from a provider.
///
/// Every variant maps onto a [`FailureKind`] via [`failure_kind`](Self::failure_kind).
/// The dashboard collapses all of them into the same `Error` sentinel, but the
/// kind is preserved so callers and tests can tell causes apart.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but the provider returned no bars for the range.
    #[error("No data for range")]
    NoDataForRange,

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that could not be interpreted.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// The provider could not be reached.
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider that could not be reached
        provider: String,
        /// The transport error message
        message: String,
    },
}

impl MarketDataError {
    /// Returns the tagged failure reason for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tickerboard_market_data::errors::{FailureKind, MarketDataError};
    ///
    /// let error = MarketDataError::SymbolNotFound("NOPE".to_string());
    /// assert_eq!(error.failure_kind(), FailureKind::NotFound);
    ///
    /// let error = MarketDataError::Timeout { provider: "YAHOO".to_string() };
    /// assert_eq!(error.failure_kind(), FailureKind::Timeout);
    /// ```
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::SymbolNotFound(_) => FailureKind::NotFound,
            Self::NoDataForRange => FailureKind::NoData,
            Self::RateLimited { .. } => FailureKind::RateLimited,
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::ProviderError { .. } => FailureKind::Provider,
            Self::ValidationFailed { .. } => FailureKind::Malformed,
            Self::Network { .. } => FailureKind::Network,
        }
    }
}
