//! Caching decorators over repository ports.

mod cached_subscription_repository;

pub use cached_subscription_repository::CachedSubscriptionRepository;
