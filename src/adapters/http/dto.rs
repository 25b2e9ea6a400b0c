//! Wire shapes that exist only at the REST boundary.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::objectives::BusinessObjectives;

/// `GET /negocios/{id}`. Only the objectives are read.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessRecord {
    #[serde(rename = "objetivos", default)]
    pub objectives: Option<BusinessObjectives>,
}

/// `GET /reportes/ventas/total`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowTotal {
    pub total: Decimal,
}
