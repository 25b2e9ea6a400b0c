//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Back-office REST API (reqwest)
//! - `memory` - In-process stores for tests and local runs
//! - `cache` - TTL decorator over the subscription collection

pub mod cache;
pub mod http;
pub mod memory;

pub use cache::CachedSubscriptionRepository;
pub use http::{
    BackendClient, HttpBusinessProfileReader, HttpOrderReporting, HttpPlanRepository,
    HttpSubscriptionRepository,
};
pub use memory::{
    InMemoryBusinessProfiles, InMemoryOrderReporting, InMemoryPlanRepository,
    InMemorySubscriptionRepository,
};
