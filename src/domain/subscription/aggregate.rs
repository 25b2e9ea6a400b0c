//! Subscription aggregate entity.
//!
//! A Subscription is the commercial relationship between one business and
//! one plan. Each business owns at most one subscription at a time.
//!
//! # Design Decisions
//!
//! - **Permissive lifecycle**: any status may be set from any other.
//!   Reactivating a cancelled subscription is a normal administrative action.
//! - **Mirrored flag**: `activo` duplicates `estado == activa` for quick
//!   filtering by the boundary. It is private and recomputed on every status
//!   change so the two cannot drift.
//! - **Plan snapshot**: plan identity and price are one embedded value,
//!   replaced whole on plan change.
//! - **Payments never move status**: a payment, even a successful one, does
//!   not reactivate a suspended account. Status changes are explicit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessId, Currency, SubscriptionId, Timestamp};

use super::{
    PaymentMethod, PaymentRecord, PlanSnapshot, SubscriptionError, SubscriptionStatus,
};

/// Parameters for seeding a new subscription.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub id: SubscriptionId,
    pub business_id: BusinessId,
    pub business_name: String,
    pub plan: PlanSnapshot,
    pub status: SubscriptionStatus,
    pub start_date: Timestamp,
    pub expiration_date: Timestamp,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    pub auto_renew: bool,
    pub created_by: String,
    pub notes: Option<String>,
}

/// Subscription aggregate.
///
/// # Invariants
///
/// - `active == (status == Active)` after every status change
/// - `monthly_value >= 0` and `total_value >= 0` (held by [`PlanSnapshot`])
/// - transaction ids are unique within `payment_history`
/// - succeeded payment records are never modified
///
/// Loaded records go through [`SubscriptionRecord`], so a stored `activo`
/// that disagrees with `estado` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubscriptionRecord")]
pub struct Subscription {
    pub id: SubscriptionId,

    #[serde(rename = "negocioId")]
    pub business_id: BusinessId,

    /// Denormalized for display.
    #[serde(rename = "nombreNegocio")]
    pub business_name: String,

    #[serde(flatten)]
    plan: PlanSnapshot,

    #[serde(rename = "estado")]
    status: SubscriptionStatus,

    #[serde(rename = "fechaInicio")]
    pub start_date: Timestamp,

    #[serde(rename = "fechaVencimiento")]
    pub expiration_date: Timestamp,

    #[serde(rename = "fechaCancelacion", default, skip_serializing_if = "Option::is_none")]
    cancellation_date: Option<Timestamp>,

    #[serde(rename = "moneda")]
    pub currency: Currency,

    #[serde(rename = "metodoPago")]
    pub payment_method: PaymentMethod,

    #[serde(rename = "renovacionAutomatica")]
    pub auto_renew: bool,

    #[serde(rename = "creadoPor")]
    pub created_by: String,

    #[serde(rename = "historialPagos", default)]
    payment_history: Vec<PaymentRecord>,

    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "activo")]
    active: bool,
}

/// Stored shape of a subscription. `activo` is derived, so it is not read.
#[derive(Deserialize)]
struct SubscriptionRecord {
    id: SubscriptionId,
    #[serde(rename = "negocioId")]
    business_id: BusinessId,
    #[serde(rename = "nombreNegocio")]
    business_name: String,
    #[serde(flatten)]
    plan: PlanSnapshot,
    #[serde(rename = "estado")]
    status: SubscriptionStatus,
    #[serde(rename = "fechaInicio")]
    start_date: Timestamp,
    #[serde(rename = "fechaVencimiento")]
    expiration_date: Timestamp,
    #[serde(rename = "fechaCancelacion", default)]
    cancellation_date: Option<Timestamp>,
    #[serde(rename = "moneda")]
    currency: Currency,
    #[serde(rename = "metodoPago")]
    payment_method: PaymentMethod,
    #[serde(rename = "renovacionAutomatica")]
    auto_renew: bool,
    #[serde(rename = "creadoPor")]
    created_by: String,
    #[serde(rename = "historialPagos", default)]
    payment_history: Vec<PaymentRecord>,
    #[serde(rename = "notas", default)]
    notes: Option<String>,
}

impl From<SubscriptionRecord> for Subscription {
    fn from(record: SubscriptionRecord) -> Self {
        Self {
            id: record.id,
            business_id: record.business_id,
            business_name: record.business_name,
            plan: record.plan,
            status: record.status,
            start_date: record.start_date,
            expiration_date: record.expiration_date,
            cancellation_date: record.cancellation_date,
            currency: record.currency,
            payment_method: record.payment_method,
            auto_renew: record.auto_renew,
            created_by: record.created_by,
            payment_history: record.payment_history,
            notes: record.notes,
            active: record.status.is_active(),
        }
    }
}

/// What [`Subscription::record_payment`] did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// New transaction appended to the history.
    Appended,
    /// Existing unsettled transaction replaced by its update.
    Updated,
}

impl Subscription {
    /// Creates a subscription in one of the valid initial statuses.
    ///
    /// # Errors
    ///
    /// - initial status other than `activa` / `pendiente_pago`
    /// - blank business name
    /// - expiration before start
    pub fn create(params: NewSubscription) -> Result<Self, SubscriptionError> {
        if !params.status.is_valid_initial() {
            return Err(SubscriptionError::validation(
                "estado",
                format!(
                    "a subscription cannot start as '{}', use activa or pendiente_pago",
                    params.status
                ),
            ));
        }
        if params.business_name.trim().is_empty() {
            return Err(SubscriptionError::validation(
                "nombreNegocio",
                "business name cannot be empty",
            ));
        }
        if params.expiration_date.is_before(&params.start_date) {
            return Err(SubscriptionError::validation(
                "fechaVencimiento",
                "expiration date precedes start date",
            ));
        }

        Ok(Self {
            id: params.id,
            business_id: params.business_id,
            business_name: params.business_name,
            plan: params.plan,
            status: params.status,
            start_date: params.start_date,
            expiration_date: params.expiration_date,
            cancellation_date: None,
            currency: params.currency,
            payment_method: params.payment_method,
            auto_renew: params.auto_renew,
            created_by: params.created_by,
            payment_history: Vec::new(),
            notes: params.notes,
            active: params.status.is_active(),
        })
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    /// Quick-filter mirror of `status == activa`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn plan(&self) -> &PlanSnapshot {
        &self.plan
    }

    pub fn cancellation_date(&self) -> Option<Timestamp> {
        self.cancellation_date
    }

    pub fn payment_history(&self) -> &[PaymentRecord] {
        &self.payment_history
    }

    pub fn monthly_value(&self) -> Decimal {
        self.plan.monthly_value()
    }

    pub fn total_value(&self) -> Decimal {
        self.plan.total_value()
    }

    /// Moves the subscription to `target`, returning the previous status.
    ///
    /// Side effects:
    /// - `active` is recomputed from the new status
    /// - entering `cancelada` stamps `cancellation_date` with `now`
    ///   (kept if the subscription was already cancelled)
    /// - entering `activa` clears `cancellation_date`
    pub fn set_status(&mut self, target: SubscriptionStatus, now: Timestamp) -> SubscriptionStatus {
        let previous = self.status;

        match target {
            SubscriptionStatus::Active => self.cancellation_date = None,
            SubscriptionStatus::Cancelled if previous != SubscriptionStatus::Cancelled => {
                self.cancellation_date = Some(now)
            }
            _ => {}
        }

        self.status = target;
        self.active = target.is_active();
        previous
    }

    /// Replaces the plan snapshot. Returns false when nothing changed.
    ///
    /// Status is untouched and no history entry is written.
    pub fn change_plan(&mut self, plan: PlanSnapshot) -> bool {
        if self.plan == plan {
            return false;
        }
        self.plan = plan;
        true
    }

    /// Writes a payment into the history.
    ///
    /// A new transaction id is appended. A known transaction id replaces the
    /// earlier record as long as that record has not succeeded yet, which is
    /// how a pending payment gets settled.
    ///
    /// # Errors
    ///
    /// - invalid record (negative amount, blank method label)
    /// - transaction id already recorded as succeeded
    pub fn record_payment(
        &mut self,
        record: PaymentRecord,
    ) -> Result<PaymentOutcome, SubscriptionError> {
        record.validate()?;

        match self
            .payment_history
            .iter_mut()
            .find(|existing| existing.transaction_id == record.transaction_id)
        {
            Some(existing) if existing.status.is_final() => Err(SubscriptionError::validation(
                "transaccionId",
                format!(
                    "transaction {} is already settled and cannot be modified",
                    record.transaction_id
                ),
            )),
            Some(existing) => {
                *existing = record;
                Ok(PaymentOutcome::Updated)
            }
            None => {
                self.payment_history.push(record);
                Ok(PaymentOutcome::Appended)
            }
        }
    }

    /// Sum of succeeded payments.
    pub fn total_paid(&self) -> Decimal {
        self.payment_history
            .iter()
            .filter(|p| p.status.is_final())
            .map(|p| p.amount)
            .sum()
    }
}
