//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the back-office domain.

mod currency;
mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use currency::Currency;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BusinessId, PlanId, SubscriptionId, TransactionId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
