//! Revenue reporting domain module.
//!
//! Shapes and checks revenue figures coming from the order-reporting
//! service before they feed dashboard KPIs.

mod series;

pub use series::{DailyRevenue, RevenueSeries, RevenueWindow, SERIES_DAYS};
