//! Workbench aggregation settings

use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::WorkbenchSettings;
use crate::domain::objectives::ObjectiveTargets;

/// Longest lookback either window may be configured with.
const MAX_WINDOW_DAYS: u32 = 366;

/// Workbench configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkbenchConfig {
    #[serde(default = "default_daily_objective")]
    pub default_daily_objective: Decimal,

    #[serde(default = "default_weekly_objective")]
    pub default_weekly_objective: Decimal,

    #[serde(default = "default_monthly_objective")]
    pub default_monthly_objective: Decimal,

    /// Days covered by the recent, expiring and pending lists
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,

    /// Days covered by the revenue window total
    #[serde(default = "default_revenue_window_days")]
    pub revenue_window_days: u32,

    /// Seconds a subscription collection read stays cached; 0 disables
    #[serde(default = "default_collection_cache_ttl")]
    pub collection_cache_ttl_secs: u64,
}

impl WorkbenchConfig {
    /// Targets applied when a business configured none.
    pub fn default_objectives(&self) -> ObjectiveTargets {
        ObjectiveTargets {
            daily: self.default_daily_objective,
            weekly: self.default_weekly_objective,
            monthly: self.default_monthly_objective,
        }
    }

    /// Settings consumed by the workbench aggregator.
    pub fn settings(&self) -> WorkbenchSettings {
        WorkbenchSettings {
            default_objectives: self.default_objectives(),
            recent_window_days: self.recent_window_days,
            revenue_window_days: self.revenue_window_days,
        }
    }

    pub fn collection_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.collection_cache_ttl_secs)
    }

    /// Validate workbench configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let objectives = [
            ("default_daily_objective", self.default_daily_objective),
            ("default_weekly_objective", self.default_weekly_objective),
            ("default_monthly_objective", self.default_monthly_objective),
        ];
        for (name, value) in objectives {
            if value < Decimal::ZERO {
                return Err(ValidationError::NegativeObjective(name));
            }
        }

        let windows = [
            ("recent_window_days", self.recent_window_days),
            ("revenue_window_days", self.revenue_window_days),
        ];
        for (name, days) in windows {
            if days == 0 {
                return Err(ValidationError::EmptyWindow(name));
            }
            if days > MAX_WINDOW_DAYS {
                return Err(ValidationError::WindowTooLarge(name));
            }
        }
        if self.collection_cache_ttl_secs > 300 {
            return Err(ValidationError::CacheTtlTooLarge);
        }
        Ok(())
    }
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            default_daily_objective: default_daily_objective(),
            default_weekly_objective: default_weekly_objective(),
            default_monthly_objective: default_monthly_objective(),
            recent_window_days: default_recent_window_days(),
            revenue_window_days: default_revenue_window_days(),
            collection_cache_ttl_secs: default_collection_cache_ttl(),
        }
    }
}

fn default_daily_objective() -> Decimal {
    ObjectiveTargets::system_default().daily
}

fn default_weekly_objective() -> Decimal {
    ObjectiveTargets::system_default().weekly
}

fn default_monthly_objective() -> Decimal {
    ObjectiveTargets::system_default().monthly
}

fn default_recent_window_days() -> u32 {
    7
}

fn default_revenue_window_days() -> u32 {
    30
}

fn default_collection_cache_ttl() -> u64 {
    15
}
