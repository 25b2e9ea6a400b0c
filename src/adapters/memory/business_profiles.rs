//! In-memory business profiles.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{BusinessId, DomainError};
use crate::domain::objectives::BusinessObjectives;
use crate::ports::BusinessProfileReader;

/// Objectives keyed by business. Unknown businesses have none.
#[derive(Debug, Default)]
pub struct InMemoryBusinessProfiles {
    objectives: Arc<RwLock<HashMap<BusinessId, BusinessObjectives>>>,
    unavailable: AtomicBool,
}

impl InMemoryBusinessProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_objectives(&self, business_id: BusinessId, objectives: BusinessObjectives) {
        self.objectives.write().await.insert(business_id, objectives);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl BusinessProfileReader for InMemoryBusinessProfiles {
    async fn get_objectives(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<BusinessObjectives>, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::upstream("business profile service unavailable"));
        }
        Ok(self.objectives.read().await.get(business_id).copied())
    }
}
