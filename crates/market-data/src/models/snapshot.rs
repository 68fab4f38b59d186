use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of the trailing 7-day move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// One immutable read of market data for the tracked asset.
///
/// A fresh snapshot is built on every refresh and replaced wholesale by the
/// next one. The 7-day change defaults to 0.0 when the upstream omits it; a
/// missing price fails the refresh instead of producing a zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// Instant the snapshot represents
    pub observed_at: DateTime<Utc>,

    /// Signed percentage change over the trailing 7 days
    pub price_change_percent_7d: f64,

    /// Latest price in the quote currency
    pub current_price: f64,

    /// Chronological price samples over the trailing 7 days, exactly as many
    /// as the upstream sent. Empty when the upstream sent no sparkline.
    pub sparkline_7d: Vec<f64>,
}

impl QuoteSnapshot {
    /// Create a snapshot from decoded values
    pub fn new(
        observed_at: DateTime<Utc>,
        price_change_percent_7d: f64,
        current_price: f64,
        sparkline_7d: Vec<f64>,
    ) -> Self {
        Self {
            observed_at,
            price_change_percent_7d,
            current_price,
            sparkline_7d,
        }
    }

    /// Zero-valued snapshot for previews and first launch
    pub fn placeholder(observed_at: DateTime<Utc>) -> Self {
        Self::new(observed_at, 0.0, 0.0, Vec::new())
    }

    /// Same values, re-stamped with a new observation time
    pub fn observed(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = observed_at;
        self
    }

    /// Lowest sample of the sparkline, or 0.0 when it is empty
    pub fn sparkline_min(&self) -> f64 {
        self.sparkline_7d
            .iter()
            .copied()
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Sparkline with its minimum subtracted, so the chart floor sits at zero.
    ///
    /// `[100, 95, 110]` becomes `[5, 0, 15]`.
    pub fn baseline_series(&self) -> Vec<f64> {
        let floor = self.sparkline_min();
        self.sparkline_7d.iter().map(|p| p - floor).collect()
    }

    /// `Down` only when the 7-day change is strictly negative
    pub fn trend(&self) -> Trend {
        if self.price_change_percent_7d < 0.0 {
            Trend::Down
        } else {
            Trend::Up
        }
    }
}
