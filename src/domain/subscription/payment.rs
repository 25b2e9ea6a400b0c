//! Payment history records and the payment method on file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, TransactionId, ValidationError};

/// Outcome of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "exitoso")]
    Succeeded,

    #[serde(rename = "pendiente")]
    Pending,

    #[serde(rename = "fallido")]
    Failed,
}

impl PaymentStatus {
    /// Settled records are frozen.
    pub fn is_final(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded)
    }
}

/// One entry of a subscription's payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(rename = "transaccionId")]
    pub transaction_id: TransactionId,

    #[serde(rename = "fechaPago")]
    pub payment_date: Timestamp,

    #[serde(rename = "monto")]
    pub amount: Decimal,

    /// Human-readable method label ("Tarjeta de crédito", "PSE", ...).
    #[serde(rename = "metodoPago")]
    pub payment_method: String,

    #[serde(rename = "estado")]
    pub status: PaymentStatus,

    #[serde(rename = "comprobanteUrl", default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl PaymentRecord {
    /// Checks the record can be written to a history.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::negative("amount"));
        }
        if self.payment_method.trim().is_empty() {
            return Err(ValidationError::empty_field("paymentMethod"));
        }
        Ok(())
    }
}

/// Payment method on file for automatic charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Method kind ("tarjeta", "transferencia", "efectivo", ...).
    #[serde(rename = "tipo")]
    pub kind: String,

    #[serde(rename = "ultimosDigitos", default, skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,

    #[serde(rename = "proveedor", default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl PaymentMethod {
    /// A method without card or provider details.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            last_four_digits: None,
            provider: None,
        }
    }
}
