//! Configured and resolved revenue targets.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Targets a business has configured. Any of them may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessObjectives {
    /// Revenue expected today.
    #[serde(rename = "facturadoHoy", default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<Decimal>,

    /// Revenue expected over the last 7 days.
    #[serde(rename = "ultimos7Dias", default, skip_serializing_if = "Option::is_none")]
    pub weekly: Option<Decimal>,

    /// Revenue expected over the last 30 days.
    #[serde(rename = "ultimos30Dias", default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<Decimal>,
}

impl BusinessObjectives {
    /// True when no target is configured at all.
    pub fn is_empty(&self) -> bool {
        self.daily.is_none() && self.weekly.is_none() && self.monthly.is_none()
    }

    /// Fills each missing target from `defaults`.
    ///
    /// An explicitly configured zero is kept; the KPI for it reads 0%.
    pub fn resolve(&self, defaults: &ObjectiveTargets) -> ObjectiveTargets {
        ObjectiveTargets {
            daily: self.daily.unwrap_or(defaults.daily),
            weekly: self.weekly.unwrap_or(defaults.weekly),
            monthly: self.monthly.unwrap_or(defaults.monthly),
        }
    }
}

/// Fully resolved targets used for KPI computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveTargets {
    #[serde(rename = "facturadoHoy")]
    pub daily: Decimal,

    #[serde(rename = "ultimos7Dias")]
    pub weekly: Decimal,

    #[serde(rename = "ultimos30Dias")]
    pub monthly: Decimal,
}

impl ObjectiveTargets {
    /// Platform-wide targets applied when a business configured none.
    pub fn system_default() -> Self {
        Self {
            daily: dec!(500000),
            weekly: dec!(2000000),
            monthly: dec!(5000000),
        }
    }
}

impl Default for ObjectiveTargets {
    fn default() -> Self {
        Self::system_default()
    }
}
