//! ChangeSubscriptionPlanHandler - Command handler for plan changes.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{PlanSnapshot, Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Command to move a subscription onto another plan at an agreed price.
#[derive(Debug, Clone)]
pub struct ChangeSubscriptionPlanCommand {
    pub subscription_id: String,
    pub plan_id: String,
    pub plan_name: String,
    pub monthly_value: Decimal,
    pub total_value: Decimal,
}

/// Result of a plan change.
#[derive(Debug, Clone)]
pub struct ChangeSubscriptionPlanResult {
    pub subscription: Subscription,
    /// False when the subscription already carried this exact plan.
    pub changed: bool,
}

/// Handler for plan changes.
///
/// The plan snapshot is replaced as one value and status is untouched.
/// Re-issuing an identical change performs no write.
pub struct ChangeSubscriptionPlanHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl ChangeSubscriptionPlanHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ChangeSubscriptionPlanCommand,
    ) -> Result<ChangeSubscriptionPlanResult, SubscriptionError> {
        let id = SubscriptionId::new(cmd.subscription_id)?;
        let snapshot = PlanSnapshot::new(
            cmd.plan_id,
            cmd.plan_name,
            cmd.monthly_value,
            cmd.total_value,
        )?;

        let mut subscription = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(id.clone()))?;

        if !subscription.change_plan(snapshot) {
            tracing::debug!(subscription_id = %id, "Plan change is a no-op");
            return Ok(ChangeSubscriptionPlanResult {
                subscription,
                changed: false,
            });
        }

        self.repository.update(&subscription).await.map_err(|e| {
            tracing::error!(subscription_id = %id, error = %e, "Failed to persist plan change");
            SubscriptionError::from(e)
        })?;

        tracing::info!(
            subscription_id = %id,
            plan_id = %subscription.plan().plan_id(),
            monthly_value = %subscription.monthly_value(),
            "Subscription plan changed"
        );

        Ok(ChangeSubscriptionPlanResult {
            subscription,
            changed: true,
        })
    }
}
