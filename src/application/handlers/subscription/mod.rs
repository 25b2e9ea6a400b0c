//! Subscription handlers.
//!
//! Command and query handlers for the subscription store:
//!
//! ## Commands
//! - Creating a subscription from a catalog plan
//! - Changing status (permissive lifecycle)
//! - Changing the plan snapshot
//! - Recording payments
//!
//! ## Queries
//! - Get a subscription by id or by business
//!
//! Every command validates its whole input before the first persistence
//! call, so a rejected command never leaves a partial write.

mod change_subscription_plan;
mod change_subscription_status;
mod create_subscription;
mod get_subscription;
mod record_payment;

// Commands
pub use change_subscription_plan::{
    ChangeSubscriptionPlanCommand, ChangeSubscriptionPlanHandler, ChangeSubscriptionPlanResult,
};
pub use change_subscription_status::{
    ChangeSubscriptionStatusCommand, ChangeSubscriptionStatusHandler,
    ChangeSubscriptionStatusResult,
};
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
};
pub use record_payment::{RecordPaymentCommand, RecordPaymentHandler, RecordPaymentResult};

// Queries
pub use get_subscription::{GetSubscriptionHandler, GetSubscriptionQuery};
