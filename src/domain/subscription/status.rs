//! Subscription commercial status.
//!
//! The lifecycle is deliberately permissive: any status may be set from any
//! other, because administrative overrides (including reactivating a
//! cancelled subscription) are normal operations. What is protected is the
//! bookkeeping that accompanies a change, see [`Subscription::set_status`].
//!
//! [`Subscription::set_status`]: super::Subscription::set_status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SubscriptionError;

/// Commercial state of a business's subscription.
///
/// Wire names are the localized values of the existing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    /// Paid up and in use.
    #[serde(rename = "activa")]
    Active,

    /// Awaiting a payment before the account can be considered current.
    #[serde(rename = "pendiente_pago")]
    PendingPayment,

    /// Expiration date passed without renewal.
    #[serde(rename = "vencida")]
    Expired,

    /// Administratively paused.
    #[serde(rename = "suspendida")]
    Suspended,

    /// Ended by the business or an administrator.
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl SubscriptionStatus {
    /// Every status, in display order.
    pub const ALL: [SubscriptionStatus; 5] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::PendingPayment,
        SubscriptionStatus::Expired,
        SubscriptionStatus::Suspended,
        SubscriptionStatus::Cancelled,
    ];

    /// Wire value of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "activa",
            SubscriptionStatus::PendingPayment => "pendiente_pago",
            SubscriptionStatus::Expired => "vencida",
            SubscriptionStatus::Suspended => "suspendida",
            SubscriptionStatus::Cancelled => "cancelada",
        }
    }

    /// Value of the `active` mirror field for a subscription in this status.
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }

    /// Statuses a subscription may be created in.
    pub fn is_valid_initial(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Active | SubscriptionStatus::PendingPayment
        )
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = SubscriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubscriptionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| SubscriptionError::invalid_state(s))
    }
}
