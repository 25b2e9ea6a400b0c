use crate::domain::foundation::DomainError;
use crate::domain::revenue::DailyRevenue;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Read-only port for the order-reporting service.
///
/// Figures are scoped to the caller's authenticated business context.
/// Results are raw; shape checks happen in the application layer.
#[async_trait]
pub trait OrderReporting: Send + Sync {
    /// Daily revenue for the last seven calendar days.
    async fn last_7_days(&self) -> Result<Vec<DailyRevenue>, DomainError>;

    /// Revenue total over `[start, end]`, both inclusive.
    async fn total_in_window(&self, start: NaiveDate, end: NaiveDate)
        -> Result<Decimal, DomainError>;
}
