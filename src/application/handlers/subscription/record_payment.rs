//! RecordPaymentHandler - Command handler for payment history entries.

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{PaymentOutcome, PaymentRecord, Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Command to record a payment against a subscription.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub subscription_id: String,
    pub payment: PaymentRecord,
}

/// Result of a recorded payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentResult {
    pub subscription: Subscription,
    pub outcome: PaymentOutcome,
}

/// Handler for recording payments.
///
/// Recording a payment never changes the subscription status; a suspended
/// account stays suspended until an explicit status change.
pub struct RecordPaymentHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl RecordPaymentHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordPaymentCommand,
    ) -> Result<RecordPaymentResult, SubscriptionError> {
        let id = SubscriptionId::new(cmd.subscription_id)?;
        cmd.payment.validate()?;

        let mut subscription = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(id.clone()))?;

        let transaction_id = cmd.payment.transaction_id.clone();
        let status = cmd.payment.status;
        let outcome = subscription.record_payment(cmd.payment)?;

        self.repository.update(&subscription).await.map_err(|e| {
            tracing::error!(
                subscription_id = %id,
                transaction_id = %transaction_id,
                error = %e,
                "Failed to persist payment"
            );
            SubscriptionError::from(e)
        })?;

        tracing::info!(
            subscription_id = %id,
            transaction_id = %transaction_id,
            payment_status = ?status,
            outcome = ?outcome,
            "Payment recorded"
        );

        Ok(RecordPaymentResult {
            subscription,
            outcome,
        })
    }
}
