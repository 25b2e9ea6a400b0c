//! HTTP adapters over the back-office REST API.
//!
//! All four ports share one [`BackendClient`], which owns the base URL,
//! bearer token and request timeout.

mod business_profile_reader;
mod client;
mod dto;
mod order_reporting;
mod plan_repository;
mod subscription_repository;

pub use business_profile_reader::HttpBusinessProfileReader;
pub use client::{BackendClient, WriteOutcome};
pub use order_reporting::HttpOrderReporting;
pub use plan_repository::HttpPlanRepository;
pub use subscription_repository::HttpSubscriptionRepository;
