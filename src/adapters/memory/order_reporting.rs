//! In-memory order reporting over a stored daily revenue history.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::revenue::{DailyRevenue, SERIES_DAYS};
use crate::ports::OrderReporting;

/// Daily revenue history keyed by date.
///
/// `last_7_days` answers relative to the current UTC date; window totals
/// sum the stored days inside the window.
#[derive(Debug, Default)]
pub struct InMemoryOrderReporting {
    days: Arc<RwLock<BTreeMap<NaiveDate, DailyRevenue>>>,
    unavailable: AtomicBool,
}

impl InMemoryOrderReporting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces the figures for one day.
    pub async fn record_day(&self, day: DailyRevenue) {
        self.days.write().await.insert(day.date, day);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::upstream("order reporting unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderReporting for InMemoryOrderReporting {
    async fn last_7_days(&self) -> Result<Vec<DailyRevenue>, DomainError> {
        self.check_available()?;
        let today = Utc::now().date_naive();
        let first = today - Duration::days(SERIES_DAYS as i64 - 1);
        Ok(self
            .days
            .read()
            .await
            .range(first..=today)
            .map(|(_, day)| day.clone())
            .collect())
    }

    async fn total_in_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal, DomainError> {
        self.check_available()?;
        if start > end {
            return Ok(Decimal::ZERO);
        }
        Ok(self
            .days
            .read()
            .await
            .range(start..=end)
            .map(|(_, day)| day.revenue)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(date: NaiveDate, revenue: Decimal) -> DailyRevenue {
        DailyRevenue {
            date,
            revenue,
            order_count: 1,
            average_order_value: revenue,
        }
    }

    #[tokio::test]
    async fn last_7_days_excludes_older_history() {
        let reporting = InMemoryOrderReporting::new();
        let today = Utc::now().date_naive();
        reporting.record_day(day(today, dec!(10))).await;
        reporting.record_day(day(today - Duration::days(6), dec!(20))).await;
        reporting.record_day(day(today - Duration::days(7), dec!(30))).await;

        let series = reporting.last_7_days().await.unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].revenue, dec!(20));
        assert_eq!(series[1].revenue, dec!(10));
    }

    #[tokio::test]
    async fn window_total_sums_inclusive_range() {
        let reporting = InMemoryOrderReporting::new();
        let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        for offset in 0..5 {
            reporting
                .record_day(day(start + Duration::days(offset), dec!(100)))
                .await;
        }

        let total = reporting
            .total_in_window(start + Duration::days(1), start + Duration::days(3))
            .await
            .unwrap();

        assert_eq!(total, dec!(300));
    }

    #[tokio::test]
    async fn unavailable_reporting_fails() {
        let reporting = InMemoryOrderReporting::new();
        reporting.set_unavailable(true);
        assert!(reporting.last_7_days().await.is_err());
    }
}
