//! CoinGecko `/coins/markets` response models.
//!
//! Only the fields the widget renders are modelled. `current_price` is
//! required: an entry without it is a decode failure, not a zero price.

use serde::Deserialize;

/// One element of the markets array
#[derive(Debug, Deserialize)]
pub struct CoinMarketEntry {
    pub current_price: f64,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,
    // Note: id, symbol, market_cap, etc. exist but are not rendered
}

/// Sparkline container. A `null` sample fails the decode so the series keeps
/// the upstream length and spacing.
#[derive(Debug, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}
