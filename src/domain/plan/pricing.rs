//! Pricing plan entity and its validated input form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Currency, PlanId, ValidationError};

/// Shortest plan duration, in months.
pub const MIN_DURATION_MONTHS: u32 = 1;

/// Longest plan duration, in months.
pub const MAX_DURATION_MONTHS: u32 = 24;

/// Resource ceilings granted by a plan. Every limit is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    #[serde(rename = "maxUsuarios")]
    pub max_users: u32,

    #[serde(rename = "maxProductos")]
    pub max_products: u32,

    #[serde(rename = "maxFacturasMes")]
    pub max_invoices_per_month: u32,

    /// Cash registers / points of sale.
    #[serde(rename = "maxCajas")]
    pub max_registers: u32,
}

impl ResourceLimits {
    pub fn new(
        max_users: u32,
        max_products: u32,
        max_invoices_per_month: u32,
        max_registers: u32,
    ) -> Self {
        Self {
            max_users,
            max_products,
            max_invoices_per_month,
            max_registers,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let limits = [
            ("maxUsuarios", self.max_users),
            ("maxProductos", self.max_products),
            ("maxFacturasMes", self.max_invoices_per_month),
            ("maxCajas", self.max_registers),
        ];
        for (field, value) in limits {
            if value < 1 {
                return Err(ValidationError::out_of_range(
                    field,
                    1,
                    i64::from(u32::MAX),
                    i64::from(value),
                ));
            }
        }
        Ok(())
    }
}

/// Optional capabilities switched on by a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanFeatures {
    #[serde(rename = "soporte", default)]
    pub support: bool,

    #[serde(rename = "reportesAvanzados", default)]
    pub advanced_reports: bool,

    #[serde(rename = "integracionContable", default)]
    pub accounting_integration: bool,

    #[serde(rename = "respaldo", default)]
    pub backup: bool,
}

/// A priced tier in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: Decimal,

    #[serde(rename = "moneda")]
    pub currency: Currency,

    #[serde(rename = "duracionMeses")]
    pub duration_months: u32,

    #[serde(rename = "limites")]
    pub limits: ResourceLimits,

    #[serde(rename = "caracteristicas", default)]
    pub features: PlanFeatures,

    #[serde(rename = "activo")]
    pub active: bool,

    #[serde(default)]
    pub popular: bool,
}

/// Plan fields as submitted for create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDraft {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: Decimal,

    #[serde(rename = "moneda")]
    pub currency: Currency,

    #[serde(rename = "duracionMeses")]
    pub duration_months: u32,

    #[serde(rename = "limites")]
    pub limits: ResourceLimits,

    #[serde(rename = "caracteristicas", default)]
    pub features: PlanFeatures,

    #[serde(rename = "activo")]
    pub active: bool,

    #[serde(default)]
    pub popular: bool,
}

impl PlanDraft {
    /// Checks every catalog rule.
    ///
    /// # Errors
    ///
    /// - blank name or description
    /// - negative price
    /// - duration outside 1..=24 months
    /// - any resource limit below 1
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("nombre"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("descripcion"));
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::negative("precio"));
        }
        if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&self.duration_months) {
            return Err(ValidationError::out_of_range(
                "duracionMeses",
                i64::from(MIN_DURATION_MONTHS),
                i64::from(MAX_DURATION_MONTHS),
                i64::from(self.duration_months),
            ));
        }
        self.limits.validate()
    }

    /// Validates and assigns an identity.
    pub fn into_plan(self, id: PlanId) -> Result<Plan, ValidationError> {
        self.validate()?;
        Ok(Plan {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            currency: self.currency,
            duration_months: self.duration_months,
            limits: self.limits,
            features: self.features,
            active: self.active,
            popular: self.popular,
        })
    }
}
