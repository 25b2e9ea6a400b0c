//! Plan catalog error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, ValidationError};

/// Errors raised by plan catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Plan fields rejected before any write was attempted.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Plan was not found.
    #[error("Plan not found: {0}")]
    NotFound(PlanId),

    /// The catalog backend failed.
    #[error("Plan catalog temporarily unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl PlanError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: PlanId) -> Self {
        PlanError::NotFound(id)
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::UpstreamUnavailable(_) => ErrorCode::UpstreamUnavailable,
        }
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PlanError::UpstreamUnavailable(_))
    }
}

impl From<ValidationError> for PlanError {
    fn from(err: ValidationError) -> Self {
        PlanError::validation(err.field(), err.to_string())
    }
}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        match err.code {
            code if code.is_validation() => PlanError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::PlanNotFound => match err.detail("id").and_then(|id| PlanId::new(id).ok()) {
                Some(id) => PlanError::NotFound(id),
                None => PlanError::UpstreamUnavailable(err.to_string()),
            },
            _ => PlanError::UpstreamUnavailable(err.to_string()),
        }
    }
}
