use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessId, Timestamp};
use crate::domain::objectives::ObjectiveTargets;

use super::{Kpis, PillarName, SubscriptionDigest, SubscriptionSummary};

/// The operational dashboard payload, computed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchSnapshot {
    /// Business the objectives were resolved for, if any
    #[serde(rename = "negocioId", skip_serializing_if = "Option::is_none")]
    pub business_id: Option<BusinessId>,

    /// Targets the KPIs were measured against
    #[serde(rename = "objetivos")]
    pub objectives: ObjectiveTargets,

    pub kpis: Kpis,

    #[serde(rename = "resumen")]
    pub summary: SubscriptionSummary,

    /// Started in the recent window
    pub recent: Vec<SubscriptionDigest>,

    /// Expired in the recent window
    pub expiring: Vec<SubscriptionDigest>,

    /// Payment pending, expiring in the recent window
    pub pending: Vec<SubscriptionDigest>,

    /// Sources that fell back to defaults in this build
    pub degraded_pillars: Vec<PillarName>,

    pub generated_at: Timestamp,
}

impl WorkbenchSnapshot {
    /// True when every source answered.
    pub fn is_complete(&self) -> bool {
        self.degraded_pillars.is_empty()
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
