//! Decimal helpers shared by the scenario formulas.
//!
//! Growth and totals saturate at the decimal range instead of panicking, so a
//! projection always completes whatever the parsed inputs are.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use scenario_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `(1 + rate)^years` over whole years, saturating at the decimal range.
///
/// Square-and-multiply, so the cost grows with the bit length of `years`.
pub fn compound_factor(
    rate: Decimal,
    years: u32,
) -> Decimal {
    let mut base = Decimal::ONE.saturating_add(rate);
    let mut remaining = years;
    let mut factor = Decimal::ONE;
    while remaining > 0 {
        if remaining & 1 == 1 {
            factor = factor.saturating_mul(base);
        }
        remaining >>= 1;
        if remaining > 0 {
            base = base.saturating_mul(base);
        }
    }
    factor
}

/// Value of `amount` after compounding at `rate` for `years`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use scenario_core::calculations::common::grow;
///
/// assert_eq!(grow(dec!(1000), dec!(0.10), 2), dec!(1210));
/// ```
pub fn grow(
    amount: Decimal,
    rate: Decimal,
    years: u32,
) -> Decimal {
    amount.saturating_mul(compound_factor(rate, years))
}

/// A recurring amount paid or received every year of the horizon.
pub fn over_years(
    annual: Decimal,
    years: u32,
) -> Decimal {
    annual.saturating_mul(Decimal::from(years))
}

/// A monthly amount expressed per year.
pub fn annualize(monthly: Decimal) -> Decimal {
    monthly.saturating_mul(Decimal::from(12))
}

/// `net / base × 100`, or `None` when `base` is zero.
pub fn roi_percent(
    net: Decimal,
    base: Decimal,
) -> Option<Decimal> {
    net.checked_div(base)?.checked_mul(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    // =========================================================================
    // compound_factor / grow tests
    // =========================================================================

    #[test]
    fn compound_factor_is_one_for_zero_years() {
        assert_eq!(compound_factor(dec!(0.10), 0), Decimal::ONE);
    }

    #[test]
    fn compound_factor_is_exact_for_ten_years_at_ten_percent() {
        assert_eq!(compound_factor(dec!(0.10), 10), dec!(2.5937424601));
    }

    #[test]
    fn compound_factor_handles_negative_rate() {
        assert_eq!(compound_factor(dec!(-0.50), 2), dec!(0.25));
    }

    #[test]
    fn compound_factor_is_exact_for_odd_and_even_bits() {
        assert_eq!(compound_factor(dec!(1), 90), dec!(1237940039285380274899124224));
        assert_eq!(compound_factor(dec!(0.10), 3), dec!(1.331));
    }

    #[test]
    fn compound_factor_handles_horizons_beyond_a_century() {
        assert!(compound_factor(dec!(0.10), 150) > compound_factor(dec!(0.10), 100));
        assert_eq!(compound_factor(Decimal::ZERO, u32::MAX), Decimal::ONE);
        assert_eq!(compound_factor(dec!(-0.10), u32::MAX), Decimal::ZERO);
    }

    #[test]
    fn compound_factor_saturates_for_huge_horizons() {
        assert_eq!(compound_factor(dec!(0.10), u32::MAX), Decimal::MAX);
        assert_eq!(compound_factor(dec!(-4), 101), Decimal::MIN);
        assert_eq!(compound_factor(dec!(-4), 100), Decimal::MAX);
    }

    #[test]
    fn grow_compounds_amount() {
        assert_eq!(grow(dec!(100000), dec!(0.10), 10), dec!(259374.24601));
    }

    #[test]
    fn grow_saturates_instead_of_overflowing() {
        assert_eq!(grow(Decimal::MAX, dec!(1), 5), Decimal::MAX);
    }

    // =========================================================================
    // over_years / annualize tests
    // =========================================================================

    #[test]
    fn over_years_multiplies_by_horizon() {
        assert_eq!(over_years(dec!(9000), 10), dec!(90000));
    }

    #[test]
    fn annualize_multiplies_by_twelve() {
        assert_eq!(annualize(dec!(500)), dec!(6000));
    }

    // =========================================================================
    // roi_percent tests
    // =========================================================================

    #[test]
    fn roi_percent_divides_and_scales() {
        assert_eq!(roi_percent(dec!(50), dec!(200)), Some(dec!(25)));
    }

    #[test]
    fn roi_percent_keeps_sign_of_loss() {
        assert_eq!(roi_percent(dec!(-50), dec!(200)), Some(dec!(-25)));
    }

    #[test]
    fn roi_percent_is_none_for_zero_base() {
        assert_eq!(roi_percent(dec!(50), Decimal::ZERO), None);
    }
}
