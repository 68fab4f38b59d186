use serde::{Deserialize, Serialize};

use super::types::{CoinId, Currency};

/// The single asset/currency pair a widget tracks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSelection {
    /// Coin identifier understood by the provider
    pub coin_id: CoinId,

    /// Ticker shown under the name (e.g. "BTC")
    pub symbol: String,

    /// Human readable name (e.g. "Bitcoin")
    pub display_name: String,

    /// Currency the price is quoted in
    pub vs_currency: Currency,
}

impl AssetSelection {
    /// Create a selection for an arbitrary coin.
    pub fn new(
        coin_id: impl Into<CoinId>,
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        vs_currency: impl Into<Currency>,
    ) -> Self {
        Self {
            coin_id: coin_id.into(),
            symbol: symbol.into(),
            display_name: display_name.into(),
            vs_currency: vs_currency.into(),
        }
    }

    /// Bitcoin priced in US dollars.
    pub fn bitcoin_usd() -> Self {
        Self::new("bitcoin", "BTC", "Bitcoin", "usd")
    }
}

impl Default for AssetSelection {
    fn default() -> Self {
        Self::bitcoin_usd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bitcoin_usd() {
        let asset = AssetSelection::default();
        assert_eq!(asset.coin_id, "bitcoin");
        assert_eq!(asset.symbol, "BTC");
        assert_eq!(asset.display_name, "Bitcoin");
        assert_eq!(asset.vs_currency, "usd");
    }
}
