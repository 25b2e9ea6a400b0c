//! In-memory adapters for every port.
//!
//! Backed by `tokio::sync::RwLock`. Used by tests and local runs; not
//! suitable for multi-process deployments.

mod business_profiles;
mod order_reporting;
mod plan_repository;
mod subscription_repository;

pub use business_profiles::InMemoryBusinessProfiles;
pub use order_reporting::InMemoryOrderReporting;
pub use plan_repository::InMemoryPlanRepository;
pub use subscription_repository::InMemorySubscriptionRepository;
