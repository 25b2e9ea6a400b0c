//! Workbench (operational dashboard) services.
//!
//! Each service reads one kind of source and answers with a [`Pillar`]:
//! the fresh value, or the documented default plus the reason. The
//! aggregator joins them into a snapshot that is always returned.
//!
//! [`Pillar`]: crate::domain::workbench::Pillar

mod objective_resolver;
mod revenue_aggregator;
mod subscription_summarizer;
mod workbench_aggregator;

pub use objective_resolver::ObjectiveResolver;
pub use revenue_aggregator::RevenueAggregator;
pub use subscription_summarizer::SubscriptionSummarizer;
pub use workbench_aggregator::{GetWorkbenchSnapshotQuery, WorkbenchAggregator};

use crate::domain::objectives::ObjectiveTargets;

/// Tunables for snapshot assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkbenchSettings {
    /// Targets used when a business configured none.
    pub default_objectives: ObjectiveTargets,
    /// Days covered by the recent/expiring/pending lists.
    pub recent_window_days: u32,
    /// Days covered by the revenue window total.
    pub revenue_window_days: u32,
}

impl Default for WorkbenchSettings {
    fn default() -> Self {
        Self {
            default_objectives: ObjectiveTargets::system_default(),
            recent_window_days: 7,
            revenue_window_days: 30,
        }
    }
}
