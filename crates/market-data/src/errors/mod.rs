//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for every fetch and decode operation
//! - [`ErrorKind`]: The network/decode split callers branch on

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur while producing a quote snapshot.
///
/// Each variant is classified into an [`ErrorKind`] via the [`kind`](Self::kind)
/// method. Every variant is recoverable: the caller keeps its last known good
/// snapshot and waits for the next refresh.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request could not be sent or the connection dropped.
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider that was being called
        provider: String,
        /// Transport error message
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status}: {provider}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The status code returned
        status: u16,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Decode error: {provider} - {message}")]
    Decode {
        /// The provider whose body failed to decode
        provider: String,
        /// Parser message
        message: String,
    },

    /// The response was a valid but empty array of market entries.
    #[error("Empty response: {provider}")]
    EmptyResponse {
        /// The provider that returned no entries
        provider: String,
    },

    /// The configured endpoint could not be parsed as a URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use btcwidget_market_data::errors::{ErrorKind, MarketDataError};
    ///
    /// let error = MarketDataError::Timeout { provider: "COINGECKO".to_string() };
    /// assert_eq!(error.kind(), ErrorKind::Network);
    ///
    /// let error = MarketDataError::EmptyResponse { provider: "COINGECKO".to_string() };
    /// assert_eq!(error.kind(), ErrorKind::Decode);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::HttpStatus { .. } => {
                ErrorKind::Network
            }

            Self::Decode { .. } | Self::EmptyResponse { .. } => ErrorKind::Decode,

            Self::InvalidEndpoint(_) => ErrorKind::Config,
        }
    }

    /// Maps a transport error from `reqwest` onto the taxonomy.
    ///
    /// Timeouts become `Timeout`, everything else `Network`. HTTP status and
    /// body decoding are checked by the provider itself.
    pub(crate) fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }
}
