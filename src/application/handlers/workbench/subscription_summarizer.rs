//! SubscriptionSummarizer - counts and triage lists over the collection.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::workbench::{
    recent_window, Pillar, RecentKind, SubscriptionDigest, SubscriptionSummary,
};
use crate::ports::SubscriptionRepository;

/// Derives dashboard views from the full subscription collection.
///
/// Each call reads the collection independently, so a summary and a list
/// built concurrently may reflect different moments under writes.
pub struct SubscriptionSummarizer {
    repository: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionSummarizer {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    /// Counts by status; all zero when the collection is unavailable.
    pub async fn summary(&self) -> Pillar<SubscriptionSummary> {
        match self.repository.list_all().await {
            Ok(subscriptions) => {
                Pillar::fresh(SubscriptionSummary::from_subscriptions(&subscriptions))
            }
            Err(e) => Pillar::defaulted(SubscriptionSummary::default(), e.to_string()),
        }
    }

    /// The `kind` list over the last `days` days; empty when unavailable.
    pub async fn recent_window(
        &self,
        kind: RecentKind,
        days: u32,
        now: Timestamp,
    ) -> Pillar<Vec<SubscriptionDigest>> {
        match self.repository.list_all().await {
            Ok(subscriptions) => Pillar::fresh(recent_window(&subscriptions, kind, days, now)),
            Err(e) => Pillar::defaulted(Vec::new(), e.to_string()),
        }
    }
}
