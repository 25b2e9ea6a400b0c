//! Subscription domain module.
//!
//! Handles the subscription lifecycle, plan snapshots and payment history.
//!
//! # Module Structure
//!
//! - `aggregate` - Subscription aggregate entity
//! - `status` - SubscriptionStatus lifecycle states
//! - `plan_snapshot` - Plan identity and price frozen on the subscription
//! - `payment` - Payment history records
//! - `errors` - SubscriptionError

mod aggregate;
mod errors;
mod payment;
mod plan_snapshot;
mod status;

pub use aggregate::{NewSubscription, PaymentOutcome, Subscription};
pub use errors::SubscriptionError;
pub use payment::{PaymentMethod, PaymentRecord, PaymentStatus};
pub use plan_snapshot::PlanSnapshot;
pub use status::SubscriptionStatus;
