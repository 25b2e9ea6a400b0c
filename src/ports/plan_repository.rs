//! Plan catalog repository port.
//!
//! Deleting a plan does not check for subscriptions referencing it;
//! subscriptions carry their own plan snapshot.

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::Plan;
use async_trait::async_trait;

/// Repository port for the plan catalog.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Lists every plan, active or not.
    async fn list_all(&self) -> Result<Vec<Plan>, DomainError>;

    /// Find a plan by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// Save a new plan.
    async fn save(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Replace an existing plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if it doesn't exist
    async fn update(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Remove a plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if it doesn't exist
    async fn delete(&self, id: &PlanId) -> Result<(), DomainError>;
}
