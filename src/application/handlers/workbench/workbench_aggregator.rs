//! WorkbenchAggregator - builds the operational dashboard snapshot.
//!
//! All reads fan out at once and are joined (never raced). Each read has
//! already degraded to its default on failure, so assembly cannot fail.

use std::sync::Arc;

use crate::domain::foundation::{BusinessId, Timestamp, ValidationError};
use crate::domain::workbench::{Kpis, Pillar, PillarName, RecentKind, WorkbenchSnapshot};
use crate::ports::{BusinessProfileReader, OrderReporting, SubscriptionRepository};

use super::{ObjectiveResolver, RevenueAggregator, SubscriptionSummarizer, WorkbenchSettings};

/// Query for a dashboard snapshot.
#[derive(Debug, Clone, Default)]
pub struct GetWorkbenchSnapshotQuery {
    /// Business whose objectives apply; platform defaults when absent.
    pub business_id: Option<String>,
}

/// Orchestrates objectives, revenue and subscription reads into one
/// [`WorkbenchSnapshot`].
pub struct WorkbenchAggregator {
    objectives: ObjectiveResolver,
    revenue: RevenueAggregator,
    subscriptions: SubscriptionSummarizer,
    settings: WorkbenchSettings,
}

impl WorkbenchAggregator {
    pub fn new(
        profiles: Arc<dyn BusinessProfileReader>,
        reporting: Arc<dyn OrderReporting>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        settings: WorkbenchSettings,
    ) -> Self {
        Self {
            objectives: ObjectiveResolver::new(profiles, settings.default_objectives),
            revenue: RevenueAggregator::new(reporting),
            subscriptions: SubscriptionSummarizer::new(subscriptions),
            settings,
        }
    }

    /// # Errors
    ///
    /// Only a blank business id is rejected; collaborator failures degrade.
    pub async fn handle(
        &self,
        query: GetWorkbenchSnapshotQuery,
    ) -> Result<WorkbenchSnapshot, ValidationError> {
        let business_id = query.business_id.map(BusinessId::new).transpose()?;
        Ok(self.build_snapshot(business_id).await)
    }

    pub async fn build_snapshot(&self, business_id: Option<BusinessId>) -> WorkbenchSnapshot {
        self.build_snapshot_at(business_id, Timestamp::now()).await
    }

    /// Builds a snapshot as seen at `now`.
    pub async fn build_snapshot_at(
        &self,
        business_id: Option<BusinessId>,
        now: Timestamp,
    ) -> WorkbenchSnapshot {
        let days = self.settings.recent_window_days;

        let (objectives, series, window_total, summary, recent, expiring, pending) = futures::join!(
            self.objectives.resolve(business_id.as_ref()),
            self.revenue.last_7_days(),
            self.revenue
                .trailing_total(self.settings.revenue_window_days, now.date()),
            self.subscriptions.summary(),
            self.subscriptions.recent_window(RecentKind::Recent, days, now),
            self.subscriptions.recent_window(RecentKind::Expiring, days, now),
            self.subscriptions.recent_window(RecentKind::Pending, days, now),
        );

        let mut degraded = Vec::new();
        note_degraded(&mut degraded, PillarName::Objectives, &objectives);
        note_degraded(&mut degraded, PillarName::RevenueSeries, &series);
        note_degraded(&mut degraded, PillarName::RevenueWindow, &window_total);
        note_degraded(&mut degraded, PillarName::Summary, &summary);
        note_degraded(&mut degraded, PillarName::RecentSubscriptions, &recent);
        note_degraded(&mut degraded, PillarName::ExpiringSubscriptions, &expiring);
        note_degraded(&mut degraded, PillarName::PendingSubscriptions, &pending);

        let objectives = objectives.into_value();
        let kpis = Kpis::compute(series.value(), window_total.into_value(), &objectives);

        tracing::debug!(
            business_id = ?business_id.as_ref().map(BusinessId::as_str),
            degraded = degraded.len(),
            "Workbench snapshot built"
        );

        WorkbenchSnapshot {
            business_id,
            objectives,
            kpis,
            summary: summary.into_value(),
            recent: recent.into_value(),
            expiring: expiring.into_value(),
            pending: pending.into_value(),
            degraded_pillars: degraded,
            generated_at: now,
        }
    }
}

fn note_degraded<T>(degraded: &mut Vec<PillarName>, name: PillarName, pillar: &Pillar<T>) {
    if let Some(reason) = pillar.reason() {
        tracing::warn!(pillar = %name, reason = %reason, "Workbench pillar fell back to default");
        degraded.push(name);
    }
}
