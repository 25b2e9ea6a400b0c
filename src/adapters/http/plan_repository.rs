//! Plan catalog over `/planes`.

use async_trait::async_trait;
use reqwest::Method;

use super::client::{BackendClient, WriteOutcome};
use crate::domain::foundation::{DomainError, ErrorCode, PlanId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

const COLLECTION: &str = "planes";

pub struct HttpPlanRepository {
    client: BackendClient,
}

impl HttpPlanRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn record(id: &PlanId) -> [&str; 2] {
        [COLLECTION, id.as_str()]
    }

    fn not_found(id: &PlanId) -> DomainError {
        DomainError::new(ErrorCode::PlanNotFound, format!("plan {} not found", id))
            .with_detail("id", id.as_str())
    }

    fn unexpected(method: &Method, segments: &[&str], outcome: WriteOutcome) -> DomainError {
        let path = format!("/{}", segments.join("/"));
        DomainError::upstream(format!("{} {} answered {:?}", method, path, outcome))
            .with_detail("path", path)
    }
}

#[async_trait]
impl PlanRepository for HttpPlanRepository {
    async fn list_all(&self) -> Result<Vec<Plan>, DomainError> {
        self.client.get(&[COLLECTION]).await
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        self.client.get_optional(&Self::record(id)).await
    }

    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        match self.client.write(Method::POST, &[COLLECTION], plan).await? {
            WriteOutcome::Done => Ok(()),
            other => Err(Self::unexpected(&Method::POST, &[COLLECTION], other)),
        }
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let record = Self::record(&plan.id);
        match self.client.write(Method::PUT, &record, plan).await? {
            WriteOutcome::Done => Ok(()),
            WriteOutcome::NotFound => Err(Self::not_found(&plan.id)),
            other => Err(Self::unexpected(&Method::PUT, &record, other)),
        }
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        let record = Self::record(id);
        match self.client.delete(&record).await? {
            WriteOutcome::Done => Ok(()),
            WriteOutcome::NotFound => Err(Self::not_found(id)),
            other => Err(Self::unexpected(&Method::DELETE, &record, other)),
        }
    }
}
