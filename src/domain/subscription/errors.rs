//! Subscription-specific error types.
//!
//! # Caller Mapping
//!
//! | Error | Meaning for the caller |
//! |-------|------------------------|
//! | ValidationFailed | Bad input, fix and resubmit |
//! | InvalidState | Unrecognized target status |
//! | NotFound | No such subscription |
//! | AlreadyExists | Business already owns a subscription |
//! | UpstreamUnavailable | Temporary failure, try again |

use thiserror::Error;

use crate::domain::foundation::{
    BusinessId, DomainError, ErrorCode, SubscriptionId, ValidationError,
};

/// Errors raised by subscription store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    /// Input rejected before any write was attempted.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Target status is not one of the known lifecycle states.
    #[error("Unrecognized subscription status: '{0}'")]
    InvalidState(String),

    /// Subscription was not found.
    #[error("Subscription not found: {0}")]
    NotFound(SubscriptionId),

    /// The business already owns a subscription.
    #[error("Business {0} already has a subscription")]
    AlreadyExists(BusinessId),

    /// A collaborator failed; the write did not happen.
    #[error("Subscription service temporarily unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl SubscriptionError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubscriptionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_state(requested: impl Into<String>) -> Self {
        SubscriptionError::InvalidState(requested.into())
    }

    pub fn not_found(id: SubscriptionId) -> Self {
        SubscriptionError::NotFound(id)
    }

    pub fn already_exists(business_id: BusinessId) -> Self {
        SubscriptionError::AlreadyExists(business_id)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        SubscriptionError::UpstreamUnavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SubscriptionError::InvalidState(_) => ErrorCode::InvalidState,
            SubscriptionError::NotFound(_) => ErrorCode::SubscriptionNotFound,
            SubscriptionError::AlreadyExists(_) => ErrorCode::SubscriptionExists,
            SubscriptionError::UpstreamUnavailable(_) => ErrorCode::UpstreamUnavailable,
        }
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubscriptionError::UpstreamUnavailable(_))
    }
}

impl From<ValidationError> for SubscriptionError {
    fn from(err: ValidationError) -> Self {
        SubscriptionError::validation(err.field(), err.to_string())
    }
}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            code if code.is_validation() => SubscriptionError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::InvalidState => SubscriptionError::InvalidState(err.message),
            ErrorCode::SubscriptionNotFound => match err.detail("id").and_then(|id| SubscriptionId::new(id).ok()) {
                Some(id) => SubscriptionError::NotFound(id),
                None => SubscriptionError::UpstreamUnavailable(err.to_string()),
            },
            _ => SubscriptionError::UpstreamUnavailable(err.to_string()),
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
