//! Parsing of free-form field text and locale formatting of results.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use scenario_core::calculations::common::round_half_up;

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into an optional [`Decimal`].
///
/// Handles comma as thousands separator. Returns `None` for empty or whitespace-only input,
/// or when parsing fails (the failure is logged at debug).
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                tracing::debug!(input = %s, "invalid decimal, using default: {}", e);
                None
            },
            Some,
        )
    }
}

/// Parses an amount, falling back to `default` when the text is blank or not a number.
///
/// An explicit zero is kept.
pub fn parse_or_default(
    s: &str,
    default: Decimal,
) -> Decimal {
    parse_optional_decimal(s).unwrap_or(default)
}

/// Parses a percentage (`"10"` is 10 %) into a rate (`0.10`), falling back to
/// `default_rate` when the text is blank or not a number.
pub fn parse_percent_or_default(
    s: &str,
    default_rate: Decimal,
) -> Decimal {
    parse_optional_decimal(s)
        .map(|pct| pct / Decimal::ONE_HUNDRED)
        .unwrap_or(default_rate)
}

/// Parses a whole number of years.
///
/// Fractions are truncated (`"7.9"` is 7 years) and zero, negative or
/// non-numeric text gives `None`. Horizons beyond `u32::MAX` saturate.
pub fn parse_optional_period(s: &str) -> Option<u32> {
    parse_optional_decimal(s)
        .map(|years| years.trunc())
        .filter(|years| years.is_sign_positive() && !years.is_zero())
        .map(|years| years.to_u32().unwrap_or(u32::MAX))
}

/// Parses a whole number of years, falling back to `default`.
pub fn parse_period(
    s: &str,
    default: u32,
) -> u32 {
    parse_optional_period(s).unwrap_or(default)
}

/// Inserts `.` between groups of three digits, pt-BR style.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as Brazilian reais, e.g. `R$ 1.234.567,89`.
///
/// Rounds half-up to cents. Negative amounts keep the sign after the symbol
/// (`R$ -1.500,00`).
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("R$ {sign}{},{frac_part}", group_thousands(int_part))
}

/// Formats an ROI percentage with one decimal, using "n/a" when undefined.
pub fn format_roi(roi: Option<Decimal>) -> String {
    roi.map(|r| {
        let rounded = r.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.1}%", rounded)
    })
    .unwrap_or_else(|| "n/a".to_string())
}

/// Formats a rate (`0.05`) back into the percentage text the form expects (`"5"`).
///
/// A rate too large to scale is shown as-is.
pub fn rate_to_percent_text(rate: Decimal) -> String {
    rate.checked_mul(Decimal::ONE_HUNDRED)
        .map(|pct| pct.normalize().to_string())
        .unwrap_or_else(|| rate.normalize().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_optional_decimal_handles_comma_and_empty() {
        assert_eq!(parse_optional_decimal("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_optional_decimal(""), None);
        assert_eq!(parse_optional_decimal("   "), None);
    }

    #[test]
    fn parse_optional_decimal_rejects_text() {
        assert_eq!(parse_optional_decimal("abc"), None);
    }

    #[test]
    fn parse_or_default_uses_default_for_blank_and_invalid() {
        assert_eq!(parse_or_default("", dec!(500)), dec!(500));
        assert_eq!(parse_or_default("twelve", dec!(500)), dec!(500));
        assert_eq!(parse_or_default(" 750 ", dec!(500)), dec!(750));
    }

    #[test]
    fn parse_or_default_keeps_explicit_zero() {
        assert_eq!(parse_or_default("0", dec!(50000)), Decimal::ZERO);
    }

    #[test]
    fn parse_percent_or_default_divides_by_hundred() {
        assert_eq!(parse_percent_or_default("12.5", dec!(0.10)), dec!(0.125));
        assert_eq!(parse_percent_or_default("", dec!(0.10)), dec!(0.10));
    }

    #[test]
    fn parse_period_truncates_fractions() {
        assert_eq!(parse_period("7.9", 10), 7);
    }

    #[test]
    fn parse_period_falls_back_for_zero_negative_and_text() {
        assert_eq!(parse_period("0", 10), 10);
        assert_eq!(parse_period("-3", 10), 10);
        assert_eq!(parse_period("ten", 10), 10);
        assert_eq!(parse_period("", 10), 10);
    }

    #[test]
    fn parse_period_keeps_long_horizons() {
        assert_eq!(parse_period("150", 10), 150);
        assert_eq!(parse_period("5000", 10), 5000);
    }

    #[test]
    fn parse_period_saturates_beyond_u32() {
        assert_eq!(parse_period("99999999999", 10), u32::MAX);
    }

    #[test]
    fn format_currency_groups_thousands_pt_br() {
        assert_eq!(format_currency(dec!(259374.24601)), "R$ 259.374,25");
        assert_eq!(format_currency(dec!(1234567.891)), "R$ 1.234.567,89");
        assert_eq!(format_currency(dec!(999)), "R$ 999,00");
        assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn format_currency_keeps_sign_after_symbol() {
        assert_eq!(format_currency(dec!(-1500)), "R$ -1.500,00");
    }

    #[test]
    fn format_roi_uses_one_decimal() {
        assert_eq!(format_roi(Some(dec!(159.374246))), "159.4%");
        assert_eq!(format_roi(Some(dec!(-12.25))), "-12.3%");
        assert_eq!(format_roi(Some(dec!(200))), "200.0%");
    }

    #[test]
    fn format_roi_marks_undefined() {
        assert_eq!(format_roi(None), "n/a");
    }

    #[test]
    fn rate_to_percent_text_drops_trailing_zeros() {
        assert_eq!(rate_to_percent_text(dec!(0.05)), "5");
        assert_eq!(rate_to_percent_text(dec!(0.125)), "12.5");
    }

    #[test]
    fn rate_to_percent_text_falls_back_when_scaling_overflows() {
        assert_eq!(
            rate_to_percent_text(Decimal::MAX),
            "79228162514264337593543950335"
        );
    }
}
