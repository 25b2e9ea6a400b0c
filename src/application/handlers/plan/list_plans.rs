//! ListPlansHandler - Query handler for the plan catalog.

use std::sync::Arc;

use crate::domain::plan::{Plan, PlanError};
use crate::ports::PlanRepository;

/// Query for the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPlansQuery {
    /// Hide plans that can no longer be assigned.
    pub only_active: bool,
}

pub struct ListPlansHandler {
    repository: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListPlansQuery) -> Result<Vec<Plan>, PlanError> {
        let plans = self.repository.list_all().await?;
        Ok(plans
            .into_iter()
            .filter(|p| !query.only_active || p.active)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{plan, MockPlanRepository};

    fn handler() -> ListPlansHandler {
        ListPlansHandler::new(Arc::new(MockPlanRepository::with(vec![
            plan("basic", true),
            plan("legacy", false),
            plan("pro", true),
        ])))
    }

    #[tokio::test]
    async fn lists_every_plan() {
        let plans = handler().handle(ListPlansQuery::default()).await.unwrap();
        assert_eq!(plans.len(), 3);
    }

    #[tokio::test]
    async fn filters_inactive_plans() {
        let plans = handler()
            .handle(ListPlansQuery { only_active: true })
            .await
            .unwrap();
        let ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["basic", "pro"]);
    }

    #[tokio::test]
    async fn catalog_failure_is_retryable() {
        let handler = ListPlansHandler::new(Arc::new(MockPlanRepository::failing()));
        let err = handler.handle(ListPlansQuery::default()).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
