//! RevenueAggregator - revenue reads with shape checks and zero defaults.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::revenue::{RevenueSeries, RevenueWindow};
use crate::domain::workbench::Pillar;
use crate::ports::OrderReporting;

/// Reads revenue from the order-reporting collaborator.
///
/// Failures and malformed answers never propagate: the series falls back
/// to empty and totals to zero.
pub struct RevenueAggregator {
    reporting: Arc<dyn OrderReporting>,
}

impl RevenueAggregator {
    pub fn new(reporting: Arc<dyn OrderReporting>) -> Self {
        Self { reporting }
    }

    /// Daily revenue of the last seven days, oldest first.
    pub async fn last_7_days(&self) -> Pillar<RevenueSeries> {
        let entries = match self.reporting.last_7_days().await {
            Ok(entries) => entries,
            Err(e) => return Pillar::defaulted(RevenueSeries::empty(), e.to_string()),
        };

        match RevenueSeries::from_report(entries) {
            Ok(series) => Pillar::fresh(series),
            Err(e) => Pillar::defaulted(RevenueSeries::empty(), e.to_string()),
        }
    }

    /// Revenue total over `[start, end]`.
    pub async fn total_in_window(&self, start: NaiveDate, end: NaiveDate) -> Pillar<Decimal> {
        match RevenueWindow::new(start, end) {
            Ok(window) => self.total(window).await,
            Err(e) => Pillar::defaulted(Decimal::ZERO, e.to_string()),
        }
    }

    /// Revenue total over the `days` days ending `today`.
    pub async fn trailing_total(&self, days: u32, today: NaiveDate) -> Pillar<Decimal> {
        self.total(RevenueWindow::trailing_days(days, today)).await
    }

    async fn total(&self, window: RevenueWindow) -> Pillar<Decimal> {
        match self
            .reporting
            .total_in_window(window.start(), window.end())
            .await
        {
            Ok(total) if total < Decimal::ZERO => {
                Pillar::defaulted(Decimal::ZERO, format!("negative window total {}", total))
            }
            Ok(total) => Pillar::fresh(total),
            Err(e) => Pillar::defaulted(Decimal::ZERO, e.to_string()),
        }
    }
}
