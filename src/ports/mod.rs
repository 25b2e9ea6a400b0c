//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SubscriptionRepository` - Subscription collection (read and write)
//! - `PlanRepository` - Plan catalog (read and write)
//!
//! ## Reporting Ports
//!
//! - `BusinessProfileReader` - Per-business configured objectives
//! - `OrderReporting` - Revenue series and window totals

mod business_profile_reader;
mod order_reporting;
mod plan_repository;
mod subscription_repository;

pub use business_profile_reader::BusinessProfileReader;
pub use order_reporting::OrderReporting;
pub use plan_repository::PlanRepository;
pub use subscription_repository::SubscriptionRepository;
