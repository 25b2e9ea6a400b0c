//! In-memory subscription repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{BusinessId, DomainError, ErrorCode, SubscriptionId};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;

/// Subscription collection keyed by id.
///
/// Enforces one subscription per business on `save`. Can be switched to an
/// unavailable state to exercise degradation paths.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: Arc<RwLock<HashMap<SubscriptionId, Subscription>>>,
    unavailable: AtomicBool,
    collection_reads: AtomicUsize,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with `subscriptions`.
    pub fn with_subscriptions(subscriptions: impl IntoIterator<Item = Subscription>) -> Self {
        let map = subscriptions
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();
        Self {
            subscriptions: Arc::new(RwLock::new(map)),
            ..Self::default()
        }
    }

    /// Makes every call fail with `UpstreamUnavailable` until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `list_all` calls served so far.
    pub fn collection_reads(&self) -> usize {
        self.collection_reads.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::upstream("subscription store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn list_all(&self) -> Result<Vec<Subscription>, DomainError> {
        self.check_available()?;
        self.collection_reads.fetch_add(1, Ordering::SeqCst);
        let subscriptions = self.subscriptions.read().await;
        let mut all: Vec<Subscription> = subscriptions.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        self.check_available()?;
        Ok(self.subscriptions.read().await.get(id).cloned())
    }

    async fn find_by_business_id(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<Subscription>, DomainError> {
        self.check_available()?;
        Ok(self
            .subscriptions
            .read()
            .await
            .values()
            .find(|s| &s.business_id == business_id)
            .cloned())
    }

    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.check_available()?;
        let mut subscriptions = self.subscriptions.write().await;
        if subscriptions
            .values()
            .any(|s| s.business_id == subscription.business_id)
        {
            return Err(DomainError::new(
                ErrorCode::SubscriptionExists,
                format!("business {} already has a subscription", subscription.business_id),
            )
            .with_detail("businessId", subscription.business_id.as_str()));
        }
        subscriptions.insert(subscription.id.clone(), subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.check_available()?;
        let mut subscriptions = self.subscriptions.write().await;
        match subscriptions.get_mut(&subscription.id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("subscription {} not found", subscription.id),
            )
            .with_detail("id", subscription.id.as_str())),
        }
    }
}
