//! Plan data frozen onto a subscription at assignment time.
//!
//! Later edits to the catalog plan never alter a signed subscription's
//! price; the snapshot only changes through an explicit plan change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, ValidationError};
use crate::domain::plan::Plan;

/// The plan a subscription currently references, with its agreed price.
///
/// Always replaced as a whole so `plan_id`, `plan_name` and the values
/// can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlanSnapshotRecord")]
pub struct PlanSnapshot {
    #[serde(rename = "planId")]
    plan_id: PlanId,

    #[serde(rename = "nombrePlan")]
    plan_name: String,

    #[serde(rename = "valorMensual")]
    monthly_value: Decimal,

    #[serde(rename = "valorTotal")]
    total_value: Decimal,
}

/// Wire shape of a snapshot; loaded records pass through `PlanSnapshot::new`.
#[derive(Deserialize)]
struct PlanSnapshotRecord {
    #[serde(rename = "planId")]
    plan_id: String,

    #[serde(rename = "nombrePlan")]
    plan_name: String,

    #[serde(rename = "valorMensual")]
    monthly_value: Decimal,

    #[serde(rename = "valorTotal")]
    total_value: Decimal,
}

impl TryFrom<PlanSnapshotRecord> for PlanSnapshot {
    type Error = ValidationError;

    fn try_from(record: PlanSnapshotRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.plan_id,
            record.plan_name,
            record.monthly_value,
            record.total_value,
        )
    }
}

impl PlanSnapshot {
    /// Validates raw plan-change parameters.
    ///
    /// # Errors
    ///
    /// - blank `plan_id` or `plan_name`
    /// - negative `monthly_value` or `total_value`
    pub fn new(
        plan_id: impl Into<String>,
        plan_name: impl Into<String>,
        monthly_value: Decimal,
        total_value: Decimal,
    ) -> Result<Self, ValidationError> {
        let plan_id = PlanId::new(plan_id)?;
        let plan_name = plan_name.into();
        if plan_name.trim().is_empty() {
            return Err(ValidationError::empty_field("planName"));
        }
        if monthly_value < Decimal::ZERO {
            return Err(ValidationError::negative("monthlyValue"));
        }
        if total_value < Decimal::ZERO {
            return Err(ValidationError::negative("totalValue"));
        }
        Ok(Self {
            plan_id,
            plan_name,
            monthly_value,
            total_value,
        })
    }

    /// Snapshot of a catalog plan at its current price.
    ///
    /// The total covers the plan's full duration.
    ///
    /// # Errors
    ///
    /// `valorTotal` when price times duration does not fit a `Decimal`.
    pub fn from_plan(plan: &Plan) -> Result<Self, ValidationError> {
        let total_value = plan
            .price
            .checked_mul(Decimal::from(plan.duration_months))
            .ok_or_else(|| {
                ValidationError::invalid_format("valorTotal", "price times duration overflows")
            })?;
        Ok(Self {
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            monthly_value: plan.price,
            total_value,
        })
    }

    pub fn plan_id(&self) -> &PlanId {
        &self.plan_id
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn monthly_value(&self) -> Decimal {
        self.monthly_value
    }

    pub fn total_value(&self) -> Decimal {
        self.total_value
    }
}
