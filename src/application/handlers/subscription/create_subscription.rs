//! CreateSubscriptionHandler - Command handler for seeding subscriptions.

use std::sync::Arc;

use crate::domain::foundation::{
    BusinessId, Currency, ErrorCode, PlanId, SubscriptionId, Timestamp,
};
use crate::domain::subscription::{
    NewSubscription, PaymentMethod, PlanSnapshot, Subscription, SubscriptionError,
    SubscriptionStatus,
};
use crate::ports::{PlanRepository, SubscriptionRepository};

/// Command to subscribe a business to a catalog plan.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub business_id: String,
    pub business_name: String,
    pub plan_id: String,
    /// Initial status; `activa` or `pendiente_pago`.
    pub status: String,
    pub start_date: Timestamp,
    /// Defaults to the plan's currency.
    pub currency: Option<Currency>,
    pub payment_method: PaymentMethod,
    pub auto_renew: bool,
    pub created_by: String,
    pub notes: Option<String>,
}

/// Result of successful subscription creation.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionResult {
    pub subscription: Subscription,
}

/// Handler for creating subscriptions.
///
/// The plan is snapshotted at its current price: the monthly value is the
/// plan price and the total covers the plan's whole duration. The
/// expiration date is the start date plus that many calendar months.
pub struct CreateSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl CreateSubscriptionHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        plans: Arc<dyn PlanRepository>,
    ) -> Self {
        Self {
            subscriptions,
            plans,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, SubscriptionError> {
        // 1. Parse and validate input
        let business_id = BusinessId::new(cmd.business_id)?;
        let plan_id = PlanId::new(cmd.plan_id)?;
        let status: SubscriptionStatus = cmd.status.parse().map_err(|_| {
            SubscriptionError::validation(
                "estado",
                format!("unknown initial status '{}'", cmd.status),
            )
        })?;
        if cmd.created_by.trim().is_empty() {
            return Err(SubscriptionError::validation(
                "creadoPor",
                "creator cannot be empty",
            ));
        }

        // 2. Resolve the plan
        let plan = self
            .plans
            .find_by_id(&plan_id)
            .await
            .map_err(SubscriptionError::from)?
            .ok_or_else(|| {
                SubscriptionError::validation("planId", format!("plan {} does not exist", plan_id))
            })?;
        if !plan.active {
            return Err(SubscriptionError::validation(
                "planId",
                format!("plan {} is not active", plan_id),
            ));
        }

        // 3. One subscription per business
        if self
            .subscriptions
            .find_by_business_id(&business_id)
            .await?
            .is_some()
        {
            return Err(SubscriptionError::already_exists(business_id));
        }

        // 4. Build the aggregate (domain validation)
        let subscription = Subscription::create(NewSubscription {
            id: SubscriptionId::generate(),
            business_id: business_id.clone(),
            business_name: cmd.business_name,
            plan: PlanSnapshot::from_plan(&plan)?,
            status,
            start_date: cmd.start_date,
            expiration_date: cmd.start_date.add_months(plan.duration_months),
            currency: cmd.currency.unwrap_or(plan.currency),
            payment_method: cmd.payment_method,
            auto_renew: cmd.auto_renew,
            created_by: cmd.created_by,
            notes: cmd.notes,
        })?;

        // 5. Persist
        self.subscriptions.save(&subscription).await.map_err(|e| {
            if e.code == ErrorCode::SubscriptionExists {
                return SubscriptionError::already_exists(business_id.clone());
            }
            tracing::error!(business_id = %business_id, error = %e, "Failed to persist subscription");
            SubscriptionError::from(e)
        })?;

        tracing::info!(
            subscription_id = %subscription.id,
            business_id = %business_id,
            plan_id = %plan_id,
            status = %status,
            "Subscription created"
        );

        Ok(CreateSubscriptionResult { subscription })
    }
}
