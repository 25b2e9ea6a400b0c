//! Per-source outcome for snapshot assembly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of reading one snapshot source.
///
/// A failed read is not an error here: it carries the documented default
/// together with the reason it was used, so assembly never branches on
/// failures.
#[derive(Debug, Clone, PartialEq)]
pub enum Pillar<T> {
    Fresh(T),
    Defaulted { value: T, reason: String },
}

impl<T> Pillar<T> {
    pub fn fresh(value: T) -> Self {
        Pillar::Fresh(value)
    }

    pub fn defaulted(value: T, reason: impl Into<String>) -> Self {
        Pillar::Defaulted {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Pillar::Defaulted { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Pillar::Fresh(value) | Pillar::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Pillar::Fresh(value) | Pillar::Defaulted { value, .. } => value,
        }
    }

    /// Why the default was used, if it was.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Pillar::Fresh(_) => None,
            Pillar::Defaulted { reason, .. } => Some(reason),
        }
    }
}

/// Sources fanned into a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PillarName {
    Objectives,
    RevenueSeries,
    RevenueWindow,
    Summary,
    RecentSubscriptions,
    ExpiringSubscriptions,
    PendingSubscriptions,
}

impl PillarName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PillarName::Objectives => "objectives",
            PillarName::RevenueSeries => "revenueSeries",
            PillarName::RevenueWindow => "revenueWindow",
            PillarName::Summary => "summary",
            PillarName::RecentSubscriptions => "recentSubscriptions",
            PillarName::ExpiringSubscriptions => "expiringSubscriptions",
            PillarName::PendingSubscriptions => "pendingSubscriptions",
        }
    }
}

impl fmt::Display for PillarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
