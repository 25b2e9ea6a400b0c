//! ChangeSubscriptionStatusHandler - Command handler for lifecycle transitions.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, Timestamp};
use crate::domain::subscription::{Subscription, SubscriptionError, SubscriptionStatus};
use crate::ports::SubscriptionRepository;

/// Command to move a subscription to another status.
///
/// Both fields arrive as raw boundary strings and are parsed here.
#[derive(Debug, Clone)]
pub struct ChangeSubscriptionStatusCommand {
    pub subscription_id: String,
    pub status: String,
}

/// Result of a successful status change.
#[derive(Debug, Clone)]
pub struct ChangeSubscriptionStatusResult {
    pub subscription: Subscription,
    pub previous_status: SubscriptionStatus,
}

/// Handler for status changes.
///
/// Any status may follow any other. An unrecognized target fails with
/// `InvalidState` before the record is read.
pub struct ChangeSubscriptionStatusHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl ChangeSubscriptionStatusHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ChangeSubscriptionStatusCommand,
    ) -> Result<ChangeSubscriptionStatusResult, SubscriptionError> {
        // 1. Parse input
        let id = SubscriptionId::new(cmd.subscription_id)?;
        let target: SubscriptionStatus = cmd.status.parse()?;

        // 2. Load the subscription
        let mut subscription = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(id.clone()))?;

        // 3. Apply the transition (domain logic)
        let previous_status = subscription.set_status(target, Timestamp::now());

        // 4. Persist the whole record
        self.repository.update(&subscription).await.map_err(|e| {
            tracing::error!(subscription_id = %id, error = %e, "Failed to persist status change");
            SubscriptionError::from(e)
        })?;

        tracing::info!(
            subscription_id = %id,
            from = %previous_status,
            to = %target,
            "Subscription status changed"
        );

        Ok(ChangeSubscriptionStatusResult {
            subscription,
            previous_status,
        })
    }
}
