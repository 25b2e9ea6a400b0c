//! Plan catalog domain module.
//!
//! Plans are priced tiers with resource limits and feature flags.
//! Subscriptions copy what they need from a plan at assignment time, so
//! catalog edits never reach existing subscriptions.

mod errors;
mod pricing;

pub use errors::PlanError;
pub use pricing::{
    Plan, PlanDraft, PlanFeatures, ResourceLimits, MAX_DURATION_MONTHS, MIN_DURATION_MONTHS,
};
