//! ObjectiveResolver - per-business revenue targets with soft fallback.

use std::sync::Arc;

use crate::domain::foundation::BusinessId;
use crate::domain::objectives::{BusinessObjectives, ObjectiveTargets};
use crate::domain::workbench::Pillar;
use crate::ports::BusinessProfileReader;

/// Resolves the targets KPIs are measured against.
///
/// Dashboard availability must not depend on onboarding: an unknown
/// business, one without objectives, or a failed lookup all end in the
/// system defaults.
pub struct ObjectiveResolver {
    reader: Arc<dyn BusinessProfileReader>,
    defaults: ObjectiveTargets,
}

impl ObjectiveResolver {
    pub fn new(reader: Arc<dyn BusinessProfileReader>, defaults: ObjectiveTargets) -> Self {
        Self { reader, defaults }
    }

    pub fn defaults(&self) -> ObjectiveTargets {
        self.defaults
    }

    /// Configured objectives, or `None` when unset or unavailable.
    pub async fn lookup(&self, business_id: &BusinessId) -> Option<BusinessObjectives> {
        match self.reader.get_objectives(business_id).await {
            Ok(objectives) => objectives.filter(|o| !o.is_empty()),
            Err(e) => {
                tracing::warn!(business_id = %business_id, error = %e, "Objective lookup failed");
                None
            }
        }
    }

    /// Targets for `business_id`, defaults filled in per field.
    ///
    /// Only a failed lookup is reported as degraded; a business that
    /// configured nothing simply gets the defaults.
    pub async fn resolve(&self, business_id: Option<&BusinessId>) -> Pillar<ObjectiveTargets> {
        let Some(business_id) = business_id else {
            return Pillar::fresh(self.defaults);
        };

        match self.reader.get_objectives(business_id).await {
            Ok(Some(objectives)) => Pillar::fresh(objectives.resolve(&self.defaults)),
            Ok(None) => {
                tracing::debug!(business_id = %business_id, "No objectives configured, using defaults");
                Pillar::fresh(self.defaults)
            }
            Err(e) => Pillar::defaulted(self.defaults, e.to_string()),
        }
    }
}
