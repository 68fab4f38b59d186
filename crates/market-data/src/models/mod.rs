//! Market data models
//!
//! This module contains the core data types:
//! - `types` - Type aliases for common identifiers (CoinId, Currency)
//! - `asset` - The tracked asset/currency pair (AssetSelection)
//! - `snapshot` - The quote record handed to renderers (QuoteSnapshot, Trend)

mod asset;
mod snapshot;
mod types;

pub use asset::AssetSelection;
pub use snapshot::{QuoteSnapshot, Trend};
pub use types::{CoinId, Currency};
