//! Feed configuration.
//!
//! Everything the reference widget hardcoded (endpoint, asset, cadence) is a
//! field here so tests and hosts can point the feed somewhere else.

use std::time::Duration;

use crate::models::AssetSelection;

/// Public CoinGecko markets listing.
pub const DEFAULT_ENDPOINT: &str = "https://api.coingecko.com/api/v3/coins/markets";

/// Default spacing between refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for a single-asset quote feed.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Markets endpoint, without query string
    pub endpoint: String,

    /// Asset and quote currency to request
    pub asset: AssetSelection,

    /// Earliest spacing between two refreshes
    pub refresh_interval: Duration,

    /// Upper bound for one HTTP request, connect through body
    pub request_timeout: Duration,
}

impl FeedConfig {
    /// Default config pointed at a different endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            asset: AssetSelection::bitcoin_usd(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
