//! Timeline production for a widget host.
//!
//! [`WidgetTimelineProvider`] is the piece a host talks to. Per refresh it
//! performs one fetch through a [`SnapshotProvider`], turns the outcome into a
//! single-entry [`Timeline`], and stamps the reload time from the
//! [`RefreshPolicy`]. A failed fetch never blanks the display: the entry falls
//! back to the last known good snapshot and says so in its [`EntryStatus`].

mod cache;

pub use cache::LastKnownGood;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;

use crate::errors::{ErrorKind, MarketDataError};
use crate::models::{AssetSelection, QuoteSnapshot};
use crate::provider::SnapshotProvider;
use crate::schedule::{RefreshPolicy, ReloadPolicy};

/// How current the snapshot in a timeline entry is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum EntryStatus {
    /// Fetched during this refresh
    Fresh,
    /// This refresh failed; the snapshot is the last known good one
    Stale(ErrorKind),
    /// This refresh failed and nothing was ever fetched; the snapshot is a placeholder
    Unavailable(ErrorKind),
}

impl EntryStatus {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh)
    }
}

/// A snapshot together with its freshness.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub snapshot: QuoteSnapshot,
    pub status: EntryStatus,
}

/// Entries to display plus the earliest time to ask again.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub policy: ReloadPolicy,
}

impl Timeline {
    /// The entry to show now. Timelines built here always carry one.
    pub fn current(&self) -> Option<&TimelineEntry> {
        self.entries.first()
    }

    pub fn reload_at(&self) -> DateTime<Utc> {
        self.policy.reload_at()
    }
}

/// Drives a snapshot provider on behalf of a widget host.
pub struct WidgetTimelineProvider<P> {
    provider: P,
    policy: RefreshPolicy,
    last_known_good: LastKnownGood,
}

impl<P: SnapshotProvider> WidgetTimelineProvider<P> {
    pub fn new(provider: P, policy: RefreshPolicy) -> Self {
        Self {
            provider,
            policy,
            last_known_good: LastKnownGood::new(),
        }
    }

    pub fn asset(&self) -> &AssetSelection {
        self.provider.asset()
    }

    pub fn policy(&self) -> &RefreshPolicy {
        &self.policy
    }

    pub fn last_known_good(&self) -> &LastKnownGood {
        &self.last_known_good
    }

    /// Zero-valued snapshot for previews and loading states.
    pub fn placeholder(&self, now: DateTime<Utc>) -> QuoteSnapshot {
        QuoteSnapshot::placeholder(now)
    }

    /// Best snapshot available without touching the network.
    pub fn get_snapshot(&self, now: DateTime<Utc>) -> QuoteSnapshot {
        self.last_known_good
            .get()
            .cloned()
            .unwrap_or_else(|| self.placeholder(now))
    }

    /// Fetch once and build the next timeline.
    ///
    /// The cache is only written after the fetch has fully completed, so
    /// dropping this future mid-request commits nothing.
    pub async fn get_timeline(&mut self, now: DateTime<Utc>) -> Timeline {
        let result = self.provider.fetch_latest_snapshot(now).await;
        let entry = self.resolve(result, now);
        let next = self.policy.next_refresh(&entry.snapshot, now);

        Timeline {
            entries: vec![entry],
            policy: ReloadPolicy::After(next),
        }
    }

    fn resolve(
        &mut self,
        result: Result<QuoteSnapshot, MarketDataError>,
        now: DateTime<Utc>,
    ) -> TimelineEntry {
        match result {
            Ok(snapshot) => {
                let snapshot = snapshot.observed(now);
                debug!(
                    "{} refresh ok: price={} change_7d={} samples={}",
                    self.provider.id(),
                    snapshot.current_price,
                    snapshot.price_change_percent_7d,
                    snapshot.sparkline_7d.len()
                );
                self.last_known_good.record_success(snapshot.clone());
                TimelineEntry {
                    snapshot,
                    status: EntryStatus::Fresh,
                }
            }
            Err(e) => {
                let kind = e.kind();
                match self.last_known_good.get() {
                    Some(previous) => {
                        warn!(
                            "{} refresh failed, keeping snapshot from {}: {}",
                            self.provider.id(),
                            previous.observed_at,
                            e
                        );
                        TimelineEntry {
                            snapshot: previous.clone(),
                            status: EntryStatus::Stale(kind),
                        }
                    }
                    None => {
                        warn!(
                            "{} refresh failed with no prior snapshot: {}",
                            self.provider.id(),
                            e
                        );
                        TimelineEntry {
                            snapshot: self.placeholder(now),
                            status: EntryStatus::Unavailable(kind),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedProvider {
        asset: AssetSelection,
        script: Mutex<VecDeque<Result<QuoteSnapshot, MarketDataError>>>,
        call_count: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(script: Vec<Result<QuoteSnapshot, MarketDataError>>) -> Self {
            Self {
                asset: AssetSelection::bitcoin_usd(),
                script: Mutex::new(script.into()),
                call_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SnapshotProvider for ScriptedProvider {
        fn id(&self) -> &'static str {
            "SCRIPTED"
        }

        fn asset(&self) -> &AssetSelection {
            &self.asset
        }

        async fn fetch_latest_snapshot(
            &self,
            _observed_at: DateTime<Utc>,
        ) -> Result<QuoteSnapshot, MarketDataError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(network_error()))
        }
    }

    fn network_error() -> MarketDataError {
        MarketDataError::Network {
            provider: "SCRIPTED".to_string(),
            message: "unreachable".to_string(),
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap()
    }

    fn good(price: f64) -> QuoteSnapshot {
        QuoteSnapshot::new(at(0), 1.5, price, vec![100.0, 95.0, 110.0])
    }

    #[tokio::test]
    async fn test_fresh_entry_on_success() {
        let provider = ScriptedProvider::new(vec![Ok(good(61234.5))]);
        let mut timeline_provider = WidgetTimelineProvider::new(provider, RefreshPolicy::default());

        let timeline = timeline_provider.get_timeline(at(5)).await;
        let entry = timeline.current().unwrap();

        assert_eq!(timeline.entries.len(), 1);
        assert_eq!(entry.status, EntryStatus::Fresh);
        assert_eq!(entry.snapshot.current_price, 61234.5);
        assert_eq!(entry.snapshot.observed_at, at(5));
        assert_eq!(timeline.reload_at(), at(20));
        assert_eq!(
            timeline_provider.last_known_good().get(),
            Some(&entry.snapshot)
        );
    }

    #[tokio::test]
    async fn test_failures_keep_last_known_good() {
        let provider = ScriptedProvider::new(vec![
            Ok(good(50000.0)),
            Err(network_error()),
            Err(network_error()),
        ]);
        let mut timeline_provider = WidgetTimelineProvider::new(provider, RefreshPolicy::default());

        let first = timeline_provider.get_timeline(at(0)).await;
        let cached = first.current().unwrap().snapshot.clone();

        for minute in [15, 30] {
            let timeline = timeline_provider.get_timeline(at(minute)).await;
            let entry = timeline.current().unwrap();
            assert_eq!(entry.status, EntryStatus::Stale(ErrorKind::Network));
            assert_eq!(entry.snapshot, cached);
            assert_eq!(timeline.reload_at(), at(minute) + Duration::minutes(15));
        }

        assert_eq!(timeline_provider.last_known_good().get(), Some(&cached));
        assert_eq!(timeline_provider.get_snapshot(at(45)), cached);
    }

    #[tokio::test]
    async fn test_unavailable_without_history() {
        let provider = ScriptedProvider::new(vec![Err(MarketDataError::EmptyResponse {
            provider: "SCRIPTED".to_string(),
        })]);
        let mut timeline_provider = WidgetTimelineProvider::new(provider, RefreshPolicy::default());

        let timeline = timeline_provider.get_timeline(at(0)).await;
        let entry = timeline.current().unwrap();

        assert_eq!(entry.status, EntryStatus::Unavailable(ErrorKind::Decode));
        assert_eq!(entry.snapshot, QuoteSnapshot::placeholder(at(0)));
        assert!(timeline_provider.last_known_good().is_empty());
        assert_eq!(timeline.reload_at(), at(15));
    }

    #[tokio::test]
    async fn test_newer_success_replaces_cache() {
        let provider = ScriptedProvider::new(vec![
            Ok(good(1.0)),
            Err(network_error()),
            Ok(good(2.0)),
        ]);
        let mut timeline_provider = WidgetTimelineProvider::new(provider, RefreshPolicy::default());

        timeline_provider.get_timeline(at(0)).await;
        timeline_provider.get_timeline(at(15)).await;
        let timeline = timeline_provider.get_timeline(at(30)).await;

        assert!(timeline.current().unwrap().status.is_fresh());
        let cached = timeline_provider.last_known_good().get().unwrap();
        assert_eq!(cached.current_price, 2.0);
        assert_eq!(cached.observed_at, at(30));
    }

    #[tokio::test]
    async fn test_one_fetch_per_timeline() {
        let provider = ScriptedProvider::new(vec![Ok(good(1.0)), Ok(good(2.0))]);
        let mut timeline_provider = WidgetTimelineProvider::new(provider, RefreshPolicy::default());

        timeline_provider.get_timeline(at(0)).await;
        timeline_provider.get_timeline(at(15)).await;

        assert_eq!(timeline_provider.provider.call_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_get_snapshot_without_history_is_placeholder() {
        let provider = ScriptedProvider::new(vec![]);
        let timeline_provider = WidgetTimelineProvider::new(provider, RefreshPolicy::default());

        assert_eq!(
            timeline_provider.get_snapshot(at(0)),
            QuoteSnapshot::placeholder(at(0))
        );
        assert_eq!(
            timeline_provider.provider.call_count.load(Ordering::SeqCst),
            0
        );
    }

    #[test]
    fn test_entry_status_serializes_reason() {
        let json = serde_json::to_value(EntryStatus::Stale(ErrorKind::Network)).unwrap();
        assert_eq!(json, serde_json::json!({"status": "stale", "reason": "network"}));

        let json = serde_json::to_value(EntryStatus::Fresh).unwrap();
        assert_eq!(json, serde_json::json!({"status": "fresh"}));
    }
}
