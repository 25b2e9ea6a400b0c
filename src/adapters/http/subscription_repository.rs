//! Subscription collection over `/suscripciones`.

use async_trait::async_trait;
use reqwest::Method;

use super::client::{BackendClient, WriteOutcome};
use crate::domain::foundation::{BusinessId, DomainError, ErrorCode, SubscriptionId};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;

const COLLECTION: &str = "suscripciones";

pub struct HttpSubscriptionRepository {
    client: BackendClient,
}

impl HttpSubscriptionRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn record(id: &SubscriptionId) -> [&str; 2] {
        [COLLECTION, id.as_str()]
    }
}

#[async_trait]
impl SubscriptionRepository for HttpSubscriptionRepository {
    async fn list_all(&self) -> Result<Vec<Subscription>, DomainError> {
        self.client.get(&[COLLECTION]).await
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        self.client.get_optional(&Self::record(id)).await
    }

    async fn find_by_business_id(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<Subscription>, DomainError> {
        let matches: Vec<Subscription> = self
            .client
            .get_with_query(&[COLLECTION], &[("negocioId", business_id.as_str())])
            .await?;
        // Backends that ignore the filter return the whole collection.
        Ok(matches
            .into_iter()
            .find(|s| s.business_id == *business_id))
    }

    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        match self.client.write(Method::POST, &[COLLECTION], subscription).await? {
            WriteOutcome::Done => Ok(()),
            WriteOutcome::Conflict => Err(DomainError::new(
                ErrorCode::SubscriptionExists,
                format!("business {} already has a subscription", subscription.business_id),
            )
            .with_detail("businessId", subscription.business_id.as_str())),
            WriteOutcome::NotFound => Err(DomainError::upstream(format!(
                "POST /{} returned 404",
                COLLECTION
            ))),
        }
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        match self
            .client
            .write(Method::PUT, &Self::record(&subscription.id), subscription)
            .await?
        {
            WriteOutcome::Done => Ok(()),
            WriteOutcome::NotFound => Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("subscription {} not found", subscription.id),
            )
            .with_detail("id", subscription.id.as_str())),
            WriteOutcome::Conflict => Err(DomainError::upstream(format!(
                "PUT /{}/{} returned 409",
                COLLECTION, subscription.id
            ))),
        }
    }
}
