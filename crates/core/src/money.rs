//! Decimal money helpers.
//!
//! Amounts are plain [`Decimal`] values in the major currency unit. Nothing in
//! here formats values for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the minor currency unit (paise/cents).
pub const MINOR_UNIT_DP: u32 = 2;

/// `amount * percent / 100`.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Multiplier left after a percentage discount: `1 - percent / 100`.
pub fn discount_factor(percent: Decimal) -> Decimal {
    Decimal::ONE - percent / Decimal::ONE_HUNDRED
}

/// Round half away from zero to `dp` decimal places.
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the minor currency unit.
pub fn round_minor(value: Decimal) -> Decimal {
    round_to(value, MINOR_UNIT_DP)
}

/// `part / whole * 100`, or `None` when `whole` is zero.
pub fn ratio_percent(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    Some(part / whole * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_helpers() {
        assert_eq!(percent_of(dec!(900), dec!(18)), dec!(162));
        assert_eq!(discount_factor(dec!(10)), dec!(0.9));
        assert_eq!(discount_factor(Decimal::ZERO), Decimal::ONE);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_minor(dec!(0.025)), dec!(0.03));
        assert_eq!(round_minor(dec!(-0.025)), dec!(-0.03));
        assert_eq!(round_to(dec!(44.79), 0), dec!(45));
    }

    #[test]
    fn ratio_of_zero_whole_is_none() {
        assert_eq!(ratio_percent(dec!(5), Decimal::ZERO), None);
        assert_eq!(ratio_percent(dec!(25), dec!(200)), Some(dec!(12.5)));
    }
}
