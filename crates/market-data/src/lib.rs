//! Bitcoin Widget Market Data Crate
//!
//! This crate produces the data behind a small price widget: one quote
//! snapshot per refresh, plus the time the host should refresh again.
//!
//! # Overview
//!
//! - Single asset, single currency (Bitcoin in USD by default)
//! - One upstream request per refresh, no retries
//! - Fixed-interval refresh schedule (15 minutes by default)
//! - Failed refreshes fall back to the last known good snapshot
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Widget Host    |  (asks for a timeline, sleeps until reload time)
//! +------------------+
//!          |
//!          v
//! +------------------------+     +------------------+
//! | WidgetTimelineProvider | --> |  LastKnownGood   |  (cache, success-only writes)
//! +------------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! | SnapshotProvider |  (CoinGecko)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  QuoteSnapshot   | --> |   DisplayModel   |  (strings + chart series)
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteSnapshot`] - One immutable read of price, 7-day change and sparkline
//! - [`AssetSelection`] - The tracked coin and quote currency
//! - [`FeedConfig`] - Endpoint, asset, refresh interval and request timeout
//! - [`RefreshPolicy`] - Computes the next refresh time
//! - [`Timeline`] - Entries to display plus a [`ReloadPolicy`]
//! - [`DisplayModel`] - Render-ready text and chart data

pub mod config;
pub mod display;
pub mod errors;
pub mod models;
pub mod provider;
pub mod schedule;
pub mod timeline;

// Re-export all public types from models
pub use models::{AssetSelection, CoinId, Currency, QuoteSnapshot, Trend};

pub use config::FeedConfig;
pub use display::{format_currency, format_percent, DisplayModel, WidgetFamily};
pub use errors::{ErrorKind, MarketDataError};
pub use provider::coingecko::{decode_markets, CoinGeckoProvider};
pub use provider::SnapshotProvider;
pub use schedule::{RefreshPolicy, ReloadPolicy};
pub use timeline::{EntryStatus, LastKnownGood, Timeline, TimelineEntry, WidgetTimelineProvider};
