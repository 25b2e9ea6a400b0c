//! In-memory plan catalog.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

#[derive(Debug, Default)]
pub struct InMemoryPlanRepository {
    plans: Arc<RwLock<HashMap<PlanId, Plan>>>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plans(plans: impl IntoIterator<Item = Plan>) -> Self {
        let map = plans.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            plans: Arc::new(RwLock::new(map)),
        }
    }

    fn not_found(id: &PlanId) -> DomainError {
        DomainError::new(ErrorCode::PlanNotFound, format!("plan {} not found", id))
            .with_detail("id", id.as_str())
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn list_all(&self) -> Result<Vec<Plan>, DomainError> {
        let mut plans: Vec<Plan> = self.plans.read().await.values().cloned().collect();
        plans.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.id.cmp(&b.id)));
        Ok(plans)
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self.plans.read().await.get(id).cloned())
    }

    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        self.plans.write().await.insert(plan.id.clone(), plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        match plans.get_mut(&plan.id) {
            Some(existing) => {
                *existing = plan.clone();
                Ok(())
            }
            None => Err(Self::not_found(&plan.id)),
        }
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        self.plans
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}
