//! UTC instants used for subscription dates and payment times.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A point in time in UTC, serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// UTC calendar day.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self < other
    }

    /// Shifts by whole days; negative values move back.
    ///
    /// Saturates at the earliest or latest representable instant.
    pub fn add_days(&self, days: i64) -> Self {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map_or_else(
                || {
                    if days < 0 {
                        Self(DateTime::<Utc>::MIN_UTC)
                    } else {
                        Self(DateTime::<Utc>::MAX_UTC)
                    }
                },
                Self,
            )
    }

    pub fn minus_days(&self, days: i64) -> Self {
        self.add_days(days.saturating_neg())
    }

    /// Shifts by calendar months.
    ///
    /// The day is clamped to the end of a shorter month (Jan 31 plus one
    /// month lands on Feb 28 or 29). Overflow saturates at the latest
    /// representable instant.
    pub fn add_months(&self, months: u32) -> Self {
        self.0
            .checked_add_months(Months::new(months))
            .map_or(Self(DateTime::<Utc>::MAX_UTC), Self)
    }

    /// True when this instant falls in `[now - days, now]`, both ends included.
    ///
    /// A window reaching past the earliest instant covers everything up to `now`.
    pub fn is_within_last_days(&self, days: u32, now: &Timestamp) -> bool {
        let window_start = now.minus_days(i64::from(days));
        (window_start..=*now).contains(self)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
