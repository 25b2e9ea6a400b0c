//! Business objectives read from `/negocios/{id}`.

use async_trait::async_trait;

use super::client::BackendClient;
use super::dto::BusinessRecord;
use crate::domain::foundation::{BusinessId, DomainError};
use crate::domain::objectives::BusinessObjectives;
use crate::ports::BusinessProfileReader;

pub struct HttpBusinessProfileReader {
    client: BackendClient,
}

impl HttpBusinessProfileReader {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BusinessProfileReader for HttpBusinessProfileReader {
    async fn get_objectives(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<BusinessObjectives>, DomainError> {
        let record: Option<BusinessRecord> = self
            .client
            .get_optional(&["negocios", business_id.as_str()])
            .await?;
        Ok(record.and_then(|r| r.objectives))
    }
}
