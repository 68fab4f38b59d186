//! Refresh scheduling.
//!
//! The policy is advisory: it yields the earliest time a host should ask for
//! the next timeline. Hosts may refresh later, batch, or skip.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::QuoteSnapshot;

/// Fixed-interval refresh policy. No jitter, no backoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshPolicy {
    interval: Duration,
}

impl RefreshPolicy {
    /// Policy with the given spacing between refreshes.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Build from a `std::time::Duration`, saturating values chrono cannot hold.
    pub fn from_std(interval: std::time::Duration) -> Self {
        Self::new(Duration::from_std(interval).unwrap_or(Duration::MAX))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Earliest acceptable time for the next refresh.
    ///
    /// Always `now + interval`; the snapshot content and whether the last
    /// fetch succeeded play no part.
    pub fn next_refresh(&self, _after: &QuoteSnapshot, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.interval)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new(Duration::minutes(15))
    }
}

/// When the host should ask for a new timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "at", rename_all = "snake_case")]
pub enum ReloadPolicy {
    /// Reload no earlier than this instant
    After(DateTime<Utc>),
}

impl ReloadPolicy {
    pub fn reload_at(&self) -> DateTime<Utc> {
        match self {
            Self::After(at) => *at,
        }
    }
}
