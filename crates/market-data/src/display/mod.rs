//! Render-ready view of a snapshot.
//!
//! Renderers get strings, a trend and an optional chart series; they never
//! see raw prices or need to handle a missing snapshot.

mod format;

pub use format::{format_currency, format_percent};

use serde::Serialize;

use crate::models::{AssetSelection, QuoteSnapshot, Trend};
use crate::timeline::{EntryStatus, TimelineEntry};

/// Decimals shown on the 7-day change.
const CHANGE_PRECISION: usize = 1;

/// Caption above the 7-day change.
const CHANGE_CAPTION: &str = "This week";

/// Supported widget sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetFamily {
    /// Home screen tile with chart
    #[default]
    Medium,
    /// Lock screen strip, text only
    AccessoryRectangular,
}

impl WidgetFamily {
    /// Parse a config value; accepts `medium`, `accessory_rectangular`,
    /// `accessory-rectangular` and `rectangular`, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "medium" => Some(Self::Medium),
            "accessory_rectangular" | "accessory-rectangular" | "rectangular" => {
                Some(Self::AccessoryRectangular)
            }
            _ => None,
        }
    }

    pub fn shows_chart(&self) -> bool {
        matches!(self, Self::Medium)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayModel {
    pub family: WidgetFamily,
    pub title: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub caption: &'static str,
    pub trend: Trend,
    /// Baseline-subtracted sparkline; `None` for families without a chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<Vec<f64>>,
    /// Short note when the values are not from the latest refresh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_note: Option<String>,
}

impl DisplayModel {
    pub fn build(snapshot: &QuoteSnapshot, asset: &AssetSelection, family: WidgetFamily) -> Self {
        Self {
            family,
            title: asset.display_name.clone(),
            symbol: asset.symbol.clone(),
            price: format_currency(snapshot.current_price, &asset.vs_currency),
            change: format_percent(snapshot.price_change_percent_7d, CHANGE_PRECISION),
            caption: CHANGE_CAPTION,
            trend: snapshot.trend(),
            chart: family.shows_chart().then(|| snapshot.baseline_series()),
            status_note: None,
        }
    }

    /// Like [`build`](Self::build), annotated with the entry's freshness.
    pub fn from_entry(entry: &TimelineEntry, asset: &AssetSelection, family: WidgetFamily) -> Self {
        let mut model = Self::build(&entry.snapshot, asset, family);
        model.status_note = match entry.status {
            EntryStatus::Fresh => None,
            EntryStatus::Stale(kind) => Some(format!(
                "as of {} ({} error)",
                entry.snapshot.observed_at.format("%H:%M UTC"),
                kind.label()
            )),
            EntryStatus::Unavailable(kind) => Some(format!("no data yet ({} error)", kind.label())),
        };
        model
    }
}
