//! Snapshot provider abstraction and implementations.
//!
//! This module contains:
//! - The `SnapshotProvider` trait the timeline provider drives
//! - The CoinGecko implementation used by the widget
//!
//! A provider performs exactly one upstream request per call. Retrying,
//! caching and scheduling belong to the caller.

mod traits;

pub mod coingecko;

// Re-exports
pub use traits::SnapshotProvider;
