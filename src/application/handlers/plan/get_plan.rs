//! GetPlanHandler - Query handler for a single plan.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::{Plan, PlanError};
use crate::ports::PlanRepository;

#[derive(Debug, Clone)]
pub struct GetPlanQuery {
    pub plan_id: String,
}

pub struct GetPlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl GetPlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPlanQuery) -> Result<Plan, PlanError> {
        let id = PlanId::new(query.plan_id)?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or(PlanError::NotFound(id))
    }
}
