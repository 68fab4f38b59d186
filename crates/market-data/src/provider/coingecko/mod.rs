//! CoinGecko provider for single-coin market snapshots.
//!
//! # API Endpoint
//!
//! - Markets: `https://api.coingecko.com/api/v3/coins/markets?vs_currency={currency}&ids={coin}&...`
//!
//! # Response Format
//!
//! A JSON array of market objects. Only the first element is used:
//! `current_price`, `price_change_percentage_7d_in_currency` and
//! `sparkline_in_7d.price`.

mod models;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::{Client, Url};

use crate::config::FeedConfig;
use crate::errors::MarketDataError;
use crate::models::{AssetSelection, QuoteSnapshot};
use crate::provider::SnapshotProvider;

use models::CoinMarketEntry;

const PROVIDER_ID: &str = "COINGECKO";

/// CoinGecko provider for a single coin.
///
/// # Example
///
/// ```ignore
/// let provider = CoinGeckoProvider::new(&FeedConfig::default())?;
/// let snapshot = provider.fetch_latest_snapshot(Utc::now()).await?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    url: Url,
    asset: AssetSelection,
}

impl CoinGeckoProvider {
    /// Create a provider from the feed config.
    ///
    /// Fails with `InvalidEndpoint` when the endpoint does not parse.
    pub fn new(config: &FeedConfig) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        let url = Self::markets_url(&config.endpoint, &config.asset)?;

        Ok(Self {
            client,
            url,
            asset: config.asset.clone(),
        })
    }

    /// Build the markets request URL for one coin, sparkline and 7d change included.
    fn markets_url(endpoint: &str, asset: &AssetSelection) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(endpoint)
            .map_err(|e| MarketDataError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        url.query_pairs_mut()
            .append_pair("vs_currency", &asset.vs_currency)
            .append_pair("ids", &asset.coin_id)
            .append_pair("order", "market_cap_desc")
            .append_pair("per_page", "1")
            .append_pair("page", "1")
            .append_pair("sparkline", "true")
            .append_pair("price_change_percentage", "7d");

        Ok(url)
    }

    /// The fully built request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Decode a markets response body into a snapshot.
///
/// Takes the first element of the array. A missing or `null` `current_price`
/// and any `null` sparkline sample are `Decode` errors; a missing 7-day change
/// becomes 0.0 and a missing sparkline becomes empty. Anything that is not a
/// JSON array of objects is a `Decode` error and an empty array is
/// `EmptyResponse`.
pub fn decode_markets(
    body: &str,
    observed_at: DateTime<Utc>,
) -> Result<QuoteSnapshot, MarketDataError> {
    let entries: Vec<CoinMarketEntry> =
        serde_json::from_str(body).map_err(|e| MarketDataError::Decode {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| MarketDataError::EmptyResponse {
            provider: PROVIDER_ID.to_string(),
        })?;

    let sparkline = entry
        .sparkline_in_7d
        .map(|s| s.price)
        .unwrap_or_default();

    Ok(QuoteSnapshot::new(
        observed_at,
        entry.price_change_percentage_7d_in_currency.unwrap_or(0.0),
        entry.current_price,
        sparkline,
    ))
}

#[async_trait]
impl SnapshotProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn asset(&self) -> &AssetSelection {
        &self.asset
    }

    async fn fetch_latest_snapshot(
        &self,
        observed_at: DateTime<Utc>,
    ) -> Result<QuoteSnapshot, MarketDataError> {
        debug!("Fetching {} market data from {}", self.asset.coin_id, self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| MarketDataError::from_reqwest(PROVIDER_ID, e))?;

        if !response.status().is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_reqwest(PROVIDER_ID, e))?;

        decode_markets(&body, observed_at)
    }
}
