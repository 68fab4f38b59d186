use crate::models::QuoteSnapshot;

/// Last successfully fetched snapshot.
///
/// Only a successful fetch replaces it; failures leave it as is, so a host
/// that loses connectivity keeps showing the last good values indefinitely.
#[derive(Clone, Debug, Default)]
pub struct LastKnownGood {
    snapshot: Option<QuoteSnapshot>,
}

impl LastKnownGood {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached snapshot with a newer one.
    pub fn record_success(&mut self, snapshot: QuoteSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn get(&self) -> Option<&QuoteSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_none()
    }
}
