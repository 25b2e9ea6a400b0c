use crate::domain::foundation::{BusinessId, DomainError};
use crate::domain::objectives::BusinessObjectives;
use async_trait::async_trait;

/// Read-only port for business profile data.
#[async_trait]
pub trait BusinessProfileReader: Send + Sync {
    /// Objectives configured for a business.
    ///
    /// Returns `None` when the business is unknown or configured none.
    async fn get_objectives(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<BusinessObjectives>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_profile_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn BusinessProfileReader) {}
    }
}
