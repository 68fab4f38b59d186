//! Snapshot provider trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::{AssetSelection, QuoteSnapshot};

/// Source of quote snapshots for a single asset.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use btcwidget_market_data::provider::SnapshotProvider;
///
/// struct FixedProvider {
///     asset: AssetSelection,
/// }
///
/// #[async_trait]
/// impl SnapshotProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     fn asset(&self) -> &AssetSelection {
///         &self.asset
///     }
///
///     async fn fetch_latest_snapshot(
///         &self,
///         observed_at: DateTime<Utc>,
///     ) -> Result<QuoteSnapshot, MarketDataError> {
///         Ok(QuoteSnapshot::new(observed_at, 1.5, 61234.5, vec![]))
///     }
/// }
/// ```
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO". Used in logs and errors.
    fn id(&self) -> &'static str;

    /// The asset and currency this provider quotes.
    fn asset(&self) -> &AssetSelection;

    /// Fetch the latest snapshot.
    ///
    /// # Arguments
    ///
    /// * `observed_at` - Timestamp to stamp on the produced snapshot
    ///
    /// # Returns
    ///
    /// A freshly built snapshot, or a `MarketDataError` describing why none
    /// could be produced. Dropping the future aborts the request.
    async fn fetch_latest_snapshot(
        &self,
        observed_at: DateTime<Utc>,
    ) -> Result<QuoteSnapshot, MarketDataError>;
}
