//! Subscription counts by status.

use serde::{Deserialize, Serialize};

use crate::domain::subscription::{Subscription, SubscriptionStatus};

/// Counts of the subscription collection partitioned by status.
///
/// Every subscription lands in exactly one bucket, so the five status
/// counters always add up to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    pub total: u32,

    #[serde(rename = "activa")]
    pub active: u32,

    #[serde(rename = "pendientePago")]
    pub pending_payment: u32,

    #[serde(rename = "vencida")]
    pub expired: u32,

    #[serde(rename = "suspendida")]
    pub suspended: u32,

    #[serde(rename = "cancelada")]
    pub cancelled: u32,
}

impl SubscriptionSummary {
    pub fn from_subscriptions(subscriptions: &[Subscription]) -> Self {
        subscriptions
            .iter()
            .fold(Self::default(), |mut summary, subscription| {
                summary.count(subscription.status());
                summary
            })
    }

    fn count(&mut self, status: SubscriptionStatus) {
        self.total += 1;
        let bucket = match status {
            SubscriptionStatus::Active => &mut self.active,
            SubscriptionStatus::PendingPayment => &mut self.pending_payment,
            SubscriptionStatus::Expired => &mut self.expired,
            SubscriptionStatus::Suspended => &mut self.suspended,
            SubscriptionStatus::Cancelled => &mut self.cancelled,
        };
        *bucket += 1;
    }

    pub fn count_of(&self, status: SubscriptionStatus) -> u32 {
        match status {
            SubscriptionStatus::Active => self.active,
            SubscriptionStatus::PendingPayment => self.pending_payment,
            SubscriptionStatus::Expired => self.expired,
            SubscriptionStatus::Suspended => self.suspended,
            SubscriptionStatus::Cancelled => self.cancelled,
        }
    }
}
