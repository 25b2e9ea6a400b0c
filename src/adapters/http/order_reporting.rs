//! Revenue reports under `/reportes/ventas`.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::client::BackendClient;
use super::dto::WindowTotal;
use crate::domain::foundation::DomainError;
use crate::domain::revenue::DailyRevenue;
use crate::ports::OrderReporting;

const LAST_7_DAYS: &[&str] = &["reportes", "ventas", "ultimos-7-dias"];
const WINDOW_TOTAL: &[&str] = &["reportes", "ventas", "total"];

pub struct HttpOrderReporting {
    client: BackendClient,
}

impl HttpOrderReporting {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderReporting for HttpOrderReporting {
    async fn last_7_days(&self) -> Result<Vec<DailyRevenue>, DomainError> {
        self.client.get(LAST_7_DAYS).await
    }

    async fn total_in_window(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal, DomainError> {
        let inicio = start.format("%Y-%m-%d").to_string();
        let fin = end.format("%Y-%m-%d").to_string();
        let body: WindowTotal = self
            .client
            .get_with_query(WINDOW_TOTAL, &[("inicio", inicio), ("fin", fin)])
            .await?;
        Ok(body.total)
    }
}
