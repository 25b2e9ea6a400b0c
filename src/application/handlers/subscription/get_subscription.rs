//! GetSubscriptionHandler - Query handler for single subscriptions.

use std::sync::Arc;

use crate::domain::foundation::{BusinessId, SubscriptionId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Query for one subscription.
#[derive(Debug, Clone)]
pub enum GetSubscriptionQuery {
    ById(String),
    ByBusiness(String),
}

/// Handler for subscription lookups.
pub struct GetSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl GetSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    /// Returns `None` for a business without a subscription.
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown subscription id
    pub async fn handle(
        &self,
        query: GetSubscriptionQuery,
    ) -> Result<Option<Subscription>, SubscriptionError> {
        match query {
            GetSubscriptionQuery::ById(raw) => {
                let id = SubscriptionId::new(raw)?;
                let subscription = self
                    .repository
                    .find_by_id(&id)
                    .await?
                    .ok_or(SubscriptionError::NotFound(id))?;
                Ok(Some(subscription))
            }
            GetSubscriptionQuery::ByBusiness(raw) => {
                let business_id = BusinessId::new(raw)?;
                Ok(self.repository.find_by_business_id(&business_id).await?)
            }
        }
    }
}
