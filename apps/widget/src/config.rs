use std::time::Duration;

use btcwidget_market_data::config::{
    DEFAULT_ENDPOINT, DEFAULT_REFRESH_INTERVAL, DEFAULT_REQUEST_TIMEOUT,
};
use btcwidget_market_data::{AssetSelection, FeedConfig, WidgetFamily};

/// How frames are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct Config {
    pub feed: FeedConfig,
    pub family: WidgetFamily,
    pub output: OutputFormat,
    /// Render a single refresh and exit
    pub once: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("BTCWIDGET_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        let defaults = AssetSelection::default();
        let vs_currency = lookup("BTCWIDGET_VS_CURRENCY")
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or_else(|| defaults.vs_currency.to_string());
        // The coin itself is fixed; only the quote currency is configurable.
        let asset = AssetSelection {
            vs_currency: vs_currency.into(),
            ..defaults
        };

        let refresh_interval = lookup("BTCWIDGET_REFRESH_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL);
        let request_timeout = lookup("BTCWIDGET_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let family = lookup("BTCWIDGET_FAMILY")
            .and_then(|v| WidgetFamily::parse(&v))
            .unwrap_or_default();
        let output = match lookup("BTCWIDGET_OUTPUT") {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
        let once = lookup("BTCWIDGET_ONCE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            feed: FeedConfig {
                endpoint,
                asset,
                refresh_interval,
                request_timeout,
            },
            family,
            output,
            once,
        }
    }
}
