//! Time-windowed triage lists.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessId, SubscriptionId, Timestamp};
use crate::domain::subscription::{Subscription, SubscriptionStatus};

/// Maximum entries in each list.
pub const RECENT_LIST_LIMIT: usize = 5;

/// Which triage list to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecentKind {
    /// Started within the window, newest first.
    Recent,
    /// `vencida` with expiration within the window.
    Expiring,
    /// `pendiente_pago` with expiration within the window.
    Pending,
}

impl RecentKind {
    pub const ALL: [RecentKind; 3] = [RecentKind::Recent, RecentKind::Expiring, RecentKind::Pending];

    fn admits(&self, subscription: &Subscription) -> bool {
        match self {
            RecentKind::Recent => true,
            RecentKind::Expiring => subscription.status() == SubscriptionStatus::Expired,
            RecentKind::Pending => subscription.status() == SubscriptionStatus::PendingPayment,
        }
    }

    /// Date the window and ordering apply to.
    pub fn reference_date(&self, subscription: &Subscription) -> Timestamp {
        match self {
            RecentKind::Recent => subscription.start_date,
            RecentKind::Expiring | RecentKind::Pending => subscription.expiration_date,
        }
    }
}

/// Compact subscription row for dashboard lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionDigest {
    pub id: SubscriptionId,

    #[serde(rename = "negocioId")]
    pub business_id: BusinessId,

    #[serde(rename = "nombreNegocio")]
    pub business_name: String,

    #[serde(rename = "nombrePlan")]
    pub plan_name: String,

    #[serde(rename = "estado")]
    pub status: SubscriptionStatus,

    #[serde(rename = "fechaInicio")]
    pub start_date: Timestamp,

    #[serde(rename = "fechaVencimiento")]
    pub expiration_date: Timestamp,

    #[serde(rename = "valorMensual")]
    pub monthly_value: Decimal,
}

impl From<&Subscription> for SubscriptionDigest {
    fn from(subscription: &Subscription) -> Self {
        Self {
            id: subscription.id.clone(),
            business_id: subscription.business_id.clone(),
            business_name: subscription.business_name.clone(),
            plan_name: subscription.plan().plan_name().to_string(),
            status: subscription.status(),
            start_date: subscription.start_date,
            expiration_date: subscription.expiration_date,
            monthly_value: subscription.monthly_value(),
        }
    }
}

/// Builds the `kind` list over `[now - days, now]`.
///
/// Sorted by the kind's reference date, newest first, at most
/// [`RECENT_LIST_LIMIT`] entries.
pub fn recent_window(
    subscriptions: &[Subscription],
    kind: RecentKind,
    days: u32,
    now: Timestamp,
) -> Vec<SubscriptionDigest> {
    let mut matching: Vec<&Subscription> = subscriptions
        .iter()
        .filter(|s| kind.admits(s))
        .filter(|s| kind.reference_date(s).is_within_last_days(days, &now))
        .collect();

    matching.sort_by(|a, b| kind.reference_date(b).cmp(&kind.reference_date(a)));
    matching
        .into_iter()
        .take(RECENT_LIST_LIMIT)
        .map(SubscriptionDigest::from)
        .collect()
}
