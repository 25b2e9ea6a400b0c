//! CreatePlanHandler - Command handler for adding catalog plans.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::{Plan, PlanDraft, PlanError};
use crate::ports::PlanRepository;

#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub draft: PlanDraft,
}

pub struct CreatePlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl CreatePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<Plan, PlanError> {
        let plan = cmd.draft.into_plan(PlanId::generate())?;

        self.repository.save(&plan).await.map_err(|e| {
            tracing::error!(plan_id = %plan.id, error = %e, "Failed to persist plan");
            PlanError::from(e)
        })?;

        tracing::info!(plan_id = %plan.id, name = %plan.name, price = %plan.price, "Plan created");
        Ok(plan)
    }
}
