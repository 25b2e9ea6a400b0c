//! Subscription repository port.
//!
//! The subscription collection is remote and small enough to be read in
//! full; partitioning and filtering happen in memory.
//!
//! # Design
//!
//! - **Whole-record writes**: `update` replaces the stored record, so a
//!   status or plan change is never half-applied
//! - **Last write wins**: no version check on concurrent updates
//! - **One per business**: `find_by_business_id` backs the uniqueness rule

use crate::domain::foundation::{BusinessId, DomainError, SubscriptionId};
use crate::domain::subscription::Subscription;
use async_trait::async_trait;

/// Repository port for Subscription aggregate persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Reads the entire collection.
    ///
    /// # Errors
    ///
    /// - `UpstreamUnavailable` if the collection cannot be read
    async fn list_all(&self) -> Result<Vec<Subscription>, DomainError>;

    /// Find a subscription by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError>;

    /// Find the subscription owned by a business.
    ///
    /// Returns `None` if the business has none.
    async fn find_by_business_id(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Save a new subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionExists` if the business already has one
    /// - `UpstreamUnavailable` on persistence failure
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Replace an existing subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if it doesn't exist
    /// - `UpstreamUnavailable` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;
}
