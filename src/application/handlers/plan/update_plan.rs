//! UpdatePlanHandler - Command handler for editing catalog plans.
//!
//! Existing subscriptions are not repriced; they keep their snapshot.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::{Plan, PlanDraft, PlanError};
use crate::ports::PlanRepository;

#[derive(Debug, Clone)]
pub struct UpdatePlanCommand {
    pub plan_id: String,
    pub draft: PlanDraft,
}

pub struct UpdatePlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl UpdatePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdatePlanCommand) -> Result<Plan, PlanError> {
        let id = PlanId::new(cmd.plan_id)?;
        let plan = cmd.draft.into_plan(id.clone())?;

        if self.repository.find_by_id(&id).await?.is_none() {
            return Err(PlanError::not_found(id));
        }

        self.repository.update(&plan).await.map_err(|e| {
            tracing::error!(plan_id = %id, error = %e, "Failed to persist plan update");
            PlanError::from(e)
        })?;

        tracing::info!(plan_id = %id, price = %plan.price, active = plan.active, "Plan updated");
        Ok(plan)
    }
}
