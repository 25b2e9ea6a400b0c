//! DeletePlanHandler - Command handler for removing catalog plans.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::PlanError;
use crate::ports::PlanRepository;

#[derive(Debug, Clone)]
pub struct DeletePlanCommand {
    pub plan_id: String,
}

/// Handler for deleting plans.
///
/// Subscriptions referencing the plan are not checked.
pub struct DeletePlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl DeletePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeletePlanCommand) -> Result<(), PlanError> {
        let id = PlanId::new(cmd.plan_id)?;
        self.repository.delete(&id).await.map_err(|e| {
            tracing::error!(plan_id = %id, error = %e, "Failed to delete plan");
            PlanError::from(e)
        })?;
        tracing::info!(plan_id = %id, "Plan deleted");
        Ok(())
    }
}
