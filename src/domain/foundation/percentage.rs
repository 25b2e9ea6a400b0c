//! Percentage value object (0-100 scale).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completion percentage between 0 and 100 inclusive, two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: Decimal) -> Self {
        let clamped = value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        Self(clamped.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Share of `target` achieved by `amount`, clamped to `[0, 100]`.
    ///
    /// A non-positive target yields zero, never a division.
    pub fn of(amount: Decimal, target: Decimal) -> Self {
        if target <= Decimal::ZERO || amount <= Decimal::ZERO {
            return Self::ZERO;
        }
        // Only a ratio far above one can overflow, which reads as complete.
        let ratio = amount
            .checked_div(target)
            .unwrap_or(Decimal::ONE)
            .min(Decimal::ONE);
        Self::new(ratio * dec!(100))
    }

    /// Returns the value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True once the target is met or exceeded.
    pub fn is_complete(&self) -> bool {
        self.0 == Decimal::ONE_HUNDRED
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percentage_new_clamps_to_range() {
        assert_eq!(Percentage::new(dec!(150)), Percentage::HUNDRED);
        assert_eq!(Percentage::new(dec!(-3)), Percentage::ZERO);
        assert_eq!(Percentage::new(dec!(42.5)).value(), dec!(42.5));
    }

    #[test]
    fn of_computes_share_of_target() {
        assert_eq!(Percentage::of(dec!(250), dec!(1000)).value(), dec!(25));
    }

    #[test]
    fn of_clamps_over_achievement() {
        let pct = Percentage::of(dec!(1200), dec!(1000));
        assert_eq!(pct, Percentage::HUNDRED);
        assert!(pct.is_complete());
    }

    #[test]
    fn of_zero_target_is_zero() {
        assert_eq!(Percentage::of(dec!(1200), Decimal::ZERO), Percentage::ZERO);
    }

    #[test]
    fn of_rounds_to_two_places() {
        assert_eq!(Percentage::of(dec!(1), dec!(3)).value(), dec!(33.33));
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(dec!(75))), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_as_number() {
        let json = serde_json::to_string(&Percentage::new(dec!(12.5))).unwrap();
        assert_eq!(json, "12.5");
    }

    proptest! {
        #[test]
        fn of_always_within_bounds(amount in -1_000_000_000i64..1_000_000_000i64,
                                   target in -1_000_000i64..1_000_000_000i64) {
            let pct = Percentage::of(Decimal::from(amount), Decimal::from(target));
            prop_assert!(pct.value() >= Decimal::ZERO);
            prop_assert!(pct.value() <= Decimal::ONE_HUNDRED);
            if target <= 0 {
                prop_assert_eq!(pct, Percentage::ZERO);
            }
        }
    }
}
