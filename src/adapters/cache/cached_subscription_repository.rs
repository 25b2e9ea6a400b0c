//! Short-lived cache for the full subscription collection.
//!
//! A snapshot build reads the collection several times concurrently; this
//! decorator lets those reads share one fetch. Single-record reads always
//! go to the inner repository, and every successful write invalidates the
//! cached collection so summaries never outlive a known change.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{BusinessId, DomainError, SubscriptionId};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;

/// Cached collection with expiry tracking.
struct CollectionCache {
    subscriptions: Vec<Subscription>,
    fetched_at: Instant,
}

impl CollectionCache {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() >= ttl
    }
}

/// TTL read-through cache in front of a [`SubscriptionRepository`].
///
/// A zero TTL disables caching entirely.
pub struct CachedSubscriptionRepository {
    inner: Arc<dyn SubscriptionRepository>,
    ttl: Duration,
    cache: RwLock<Option<CollectionCache>>,
    /// Held while fetching so concurrent misses share one upstream read.
    fetch_lock: Mutex<()>,
    /// Bumped on every invalidation; a fetch that raced a write is not stored.
    generation: AtomicU64,
}

impl CachedSubscriptionRepository {
    pub fn new(inner: Arc<dyn SubscriptionRepository>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: RwLock::new(None),
            fetch_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Drops the cached collection.
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.cache.write().await = None;
    }

    fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    async fn fresh(&self) -> Option<Vec<Subscription>> {
        let cache = self.cache.read().await;
        let cached = cache.as_ref().filter(|c| !c.is_expired(self.ttl))?;
        tracing::trace!(count = cached.subscriptions.len(), "Subscription collection cache hit");
        Some(cached.subscriptions.clone())
    }
}

#[async_trait]
impl SubscriptionRepository for CachedSubscriptionRepository {
    async fn list_all(&self) -> Result<Vec<Subscription>, DomainError> {
        if !self.is_enabled() {
            return self.inner.list_all().await;
        }

        if let Some(subscriptions) = self.fresh().await {
            return Ok(subscriptions);
        }

        let _fetching = self.fetch_lock.lock().await;
        // Another caller may have filled the cache while we waited.
        if let Some(subscriptions) = self.fresh().await {
            return Ok(subscriptions);
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let subscriptions = self.inner.list_all().await?;

        let mut cache = self.cache.write().await;
        if self.generation.load(Ordering::SeqCst) == generation {
            *cache = Some(CollectionCache {
                subscriptions: subscriptions.clone(),
                fetched_at: Instant::now(),
            });
        }
        Ok(subscriptions)
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_business_id(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<Subscription>, DomainError> {
        self.inner.find_by_business_id(business_id).await
    }

    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.inner.save(subscription).await?;
        self.invalidate().await;
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.inner.update(subscription).await?;
        self.invalidate().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySubscriptionRepository;
    use crate::domain::foundation::{Currency, Timestamp};
    use crate::domain::subscription::{
        NewSubscription, PaymentMethod, PlanSnapshot, SubscriptionStatus,
    };
    use rust_decimal_macros::dec;

    fn subscription(id: &str, business: &str) -> Subscription {
        let start = Timestamp::now();
        Subscription::create(NewSubscription {
            id: SubscriptionId::new(id).unwrap(),
            business_id: BusinessId::new(business).unwrap(),
            business_name: "Tienda".to_string(),
            plan: PlanSnapshot::new("basic", "Básico", dec!(10), dec!(10)).unwrap(),
            status: SubscriptionStatus::Active,
            start_date: start,
            expiration_date: start.add_months(1),
            currency: Currency::Cop,
            payment_method: PaymentMethod::of_kind("efectivo"),
            auto_renew: false,
            created_by: "admin".to_string(),
            notes: None,
        })
        .unwrap()
    }

    fn cached(
        ttl: Duration,
    ) -> (Arc<InMemorySubscriptionRepository>, CachedSubscriptionRepository) {
        let inner = Arc::new(InMemorySubscriptionRepository::with_subscriptions(vec![
            subscription("sub-1", "biz-1"),
        ]));
        let cached = CachedSubscriptionRepository::new(inner.clone(), ttl);
        (inner, cached)
    }

    #[tokio::test]
    async fn repeated_reads_share_one_fetch() {
        let (inner, cached) = cached(Duration::from_secs(60));

        cached.list_all().await.unwrap();
        cached.list_all().await.unwrap();
        cached.list_all().await.unwrap();

        assert_eq!(inner.collection_reads(), 1);
    }

    #[tokio::test]
    async fn concurrent_misses_share_one_fetch() {
        let (inner, cached) = cached(Duration::from_secs(60));

        let (a, b, c) = futures::join!(cached.list_all(), cached.list_all(), cached.list_all());

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(inner.collection_reads(), 1);
    }

    #[tokio::test]
    async fn update_invalidates_collection() {
        let (inner, cached) = cached(Duration::from_secs(60));
        let mut sub = cached.list_all().await.unwrap().remove(0);

        sub.set_status(SubscriptionStatus::Suspended, Timestamp::now());
        cached.update(&sub).await.unwrap();
        let after = cached.list_all().await.unwrap();

        assert_eq!(after[0].status(), SubscriptionStatus::Suspended);
        assert_eq!(inner.collection_reads(), 2);
    }

    #[tokio::test]
    async fn save_invalidates_collection() {
        let (_inner, cached) = cached(Duration::from_secs(60));
        cached.list_all().await.unwrap();

        cached.save(&subscription("sub-2", "biz-2")).await.unwrap();

        assert_eq!(cached.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn writes_behind_the_cache_show_after_ttl() {
        let (inner, cached) = cached(Duration::from_millis(20));
        cached.list_all().await.unwrap();

        inner.save(&subscription("sub-2", "biz-2")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(cached.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn zero_ttl_disables_caching() {
        let (inner, cached) = cached(Duration::ZERO);

        cached.list_all().await.unwrap();
        cached.list_all().await.unwrap();

        assert_eq!(inner.collection_reads(), 2);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let (inner, cached) = cached(Duration::from_secs(60));
        inner.set_unavailable(true);
        assert!(cached.list_all().await.is_err());

        inner.set_unavailable(false);
        assert_eq!(cached.list_all().await.unwrap().len(), 1);
    }
}
