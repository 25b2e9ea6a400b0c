//! Daily revenue series and reporting windows.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Number of calendar days in the trailing revenue series.
pub const SERIES_DAYS: usize = 7;

/// Revenue for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenue {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,

    #[serde(rename = "ventas")]
    pub revenue: Decimal,

    #[serde(rename = "cantidadOrdenes", default)]
    pub order_count: u32,

    #[serde(rename = "ticketPromedio", default)]
    pub average_order_value: Decimal,
}

/// Trailing daily revenue, oldest day first, at most [`SERIES_DAYS`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevenueSeries {
    days: Vec<DailyRevenue>,
}

impl RevenueSeries {
    /// Normalizes a raw report into a series.
    ///
    /// Entries are ordered oldest first and only the most recent
    /// [`SERIES_DAYS`] are kept.
    ///
    /// # Errors
    ///
    /// - two entries for the same date
    /// - negative revenue on any day
    pub fn from_report(mut entries: Vec<DailyRevenue>) -> Result<Self, ValidationError> {
        if let Some(day) = entries.iter().find(|d| d.revenue < Decimal::ZERO) {
            return Err(ValidationError::invalid_format(
                "ventas",
                format!("negative revenue reported for {}", day.date),
            ));
        }

        entries.sort_by_key(|d| d.date);
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(ValidationError::invalid_format(
                "fecha",
                format!("duplicate entry for {}", pair[0].date),
            ));
        }

        let excess = entries.len().saturating_sub(SERIES_DAYS);
        entries.drain(..excess);
        Ok(Self { days: entries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn days(&self) -> &[DailyRevenue] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Revenue of the most recent day, read as "today". Zero when empty.
    pub fn latest_revenue(&self) -> Decimal {
        self.days.last().map(|d| d.revenue).unwrap_or(Decimal::ZERO)
    }

    /// Revenue summed over every day in the series.
    pub fn total_revenue(&self) -> Decimal {
        self.days.iter().map(|d| d.revenue).sum()
    }
}

/// Inclusive date range for a revenue total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl RevenueWindow {
    /// # Errors
    ///
    /// Returns error if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::invalid_format(
                "inicio",
                format!("window start {} is after end {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// Window from `days` days before `today` through `today`.
    ///
    /// Starts at the earliest representable date when `days` reaches past it.
    pub fn trailing_days(days: u32, today: NaiveDate) -> Self {
        Self {
            start: today
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN),
            end: today,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}
