//! Operational dashboard ("workbench") read model.
//!
//! Everything here is derived on demand and never persisted.

mod kpi;
mod pillar;
mod recent;
mod snapshot;
mod summary;

pub use kpi::{Kpi, Kpis};
pub use pillar::{Pillar, PillarName};
pub use recent::{recent_window, RecentKind, SubscriptionDigest, RECENT_LIST_LIMIT};
pub use snapshot::WorkbenchSnapshot;
pub use summary::SubscriptionSummary;
