//! Revenue KPIs measured against objectives.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::objectives::ObjectiveTargets;
use crate::domain::revenue::RevenueSeries;

/// One revenue figure with its objective and completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub amount: Decimal,
    pub objective: Decimal,
    pub percentage: Percentage,
}

impl Kpi {
    pub fn new(amount: Decimal, objective: Decimal) -> Self {
        Self {
            amount,
            objective,
            percentage: Percentage::of(amount, objective),
        }
    }
}

/// The three dashboard KPIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(rename = "facturadoHoy")]
    pub today: Kpi,

    #[serde(rename = "ultimos7Dias")]
    pub last_7_days: Kpi,

    #[serde(rename = "ultimos30Dias")]
    pub last_30_days: Kpi,
}

impl Kpis {
    /// Computes the KPIs.
    ///
    /// - today: revenue of the most recent day in `series`
    /// - last 7 days: sum over `series`
    /// - last 30 days: `window_total`
    pub fn compute(
        series: &RevenueSeries,
        window_total: Decimal,
        targets: &ObjectiveTargets,
    ) -> Self {
        Self {
            today: Kpi::new(series.latest_revenue(), targets.daily),
            last_7_days: Kpi::new(series.total_revenue(), targets.weekly),
            last_30_days: Kpi::new(window_total, targets.monthly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::revenue::DailyRevenue;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn series(values: &[i64]) -> RevenueSeries {
        let entries = values
            .iter()
            .enumerate()
            .map(|(i, v)| DailyRevenue {
                date: NaiveDate::from_ymd_opt(2026, 10, 1 + i as u32).unwrap(),
                revenue: Decimal::from(*v),
                order_count: 0,
                average_order_value: Decimal::ZERO,
            })
            .collect();
        RevenueSeries::from_report(entries).unwrap()
    }

    #[test]
    fn weekly_kpi_clamps_over_achievement() {
        let targets = ObjectiveTargets {
            daily: dec!(1000),
            weekly: dec!(1000),
            monthly: dec!(1000),
        };
        let kpis = Kpis::compute(&series(&[100, 100, 100, 100, 100, 100, 500]), dec!(0), &targets);

        assert_eq!(kpis.last_7_days.amount, dec!(1200));
        assert_eq!(kpis.last_7_days.percentage, Percentage::HUNDRED);
        assert_eq!(kpis.today.amount, dec!(500));
        assert_eq!(kpis.today.percentage.value(), dec!(50));
    }

    #[test]
    fn empty_series_reads_zero_today() {
        let kpis = Kpis::compute(
            &RevenueSeries::empty(),
            dec!(2500000),
            &ObjectiveTargets::system_default(),
        );

        assert_eq!(kpis.today.amount, Decimal::ZERO);
        assert_eq!(kpis.today.percentage, Percentage::ZERO);
        assert_eq!(kpis.last_30_days.percentage.value(), dec!(50));
    }

    #[test]
    fn zero_objective_reads_zero_percent() {
        let targets = ObjectiveTargets {
            daily: Decimal::ZERO,
            weekly: Decimal::ZERO,
            monthly: Decimal::ZERO,
        };
        let kpis = Kpis::compute(&series(&[10]), dec!(10), &targets);

        assert_eq!(kpis.today.percentage, Percentage::ZERO);
        assert_eq!(kpis.last_7_days.percentage, Percentage::ZERO);
        assert_eq!(kpis.last_30_days.percentage, Percentage::ZERO);
    }

    #[test]
    fn serializes_with_dashboard_keys() {
        let kpis = Kpis::compute(&series(&[10]), dec!(10), &ObjectiveTargets::system_default());
        let json = serde_json::to_value(kpis).unwrap();

        assert!(json.get("facturadoHoy").is_some());
        assert!(json["ultimos7Dias"].get("percentage").is_some());
        assert!(json["ultimos30Dias"].get("objective").is_some());
    }
}
