//! Display coercions applied to raw query values.
//!
//! Every function here is total: a missing aggregate always produces a
//! fixed placeholder instead of an error.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// How a monetary amount is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyStyle {
    /// `$` followed by the value at its stored scale; missing is `$0`.
    Dollar,
    /// `Bs. ` followed by the value with two decimals; missing is `Bs. 0.00`.
    Bolivianos,
}

fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Two-decimal fixed notation, half away from zero.
///
/// ```
/// use academy_reports::shaping::format::fixed2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed2(Some(Decimal::new(78125, 3))), "78.13");
/// assert_eq!(fixed2(None), "0.00");
/// ```
pub fn fixed2(value: Option<Decimal>) -> String {
    round2(value.unwrap_or(Decimal::ZERO)).to_string()
}

/// A count, `0` when missing.
pub fn count(value: Option<i64>) -> String {
    value.unwrap_or(0).to_string()
}

/// A percentage clamped into `[0, 100]` with two decimals.
///
/// Missing means the denominator was zero and renders as `0%`.
pub fn percentage(value: Option<Decimal>) -> String {
    match value {
        Some(value) => {
            let clamped = value.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED);
            format!("{}%", round2(clamped))
        }
        None => "0%".to_string(),
    }
}

/// Turns a snake_case enum value into a label: `en_progreso` → `En progreso`.
pub fn enum_label(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A monetary amount in the given style. No thousands separator.
pub fn currency(value: Option<Decimal>, style: CurrencyStyle) -> String {
    match style {
        CurrencyStyle::Dollar => match value {
            Some(value) => format!("${value}"),
            None => "$0".to_string(),
        },
        CurrencyStyle::Bolivianos => format!("Bs. {}", fixed2(value)),
    }
}

/// `dd/mm/YYYY`, or `-` when missing.
pub fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// The text, or `N/A` when the relation is missing.
pub fn or_na(value: Option<&str>) -> String {
    value.unwrap_or("N/A").to_string()
}

/// The text, or `-` when the relation is missing.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed2_rounds_half_away_from_zero() {
        assert_eq!(fixed2(Some(decimal("2.345"))), "2.35");
        assert_eq!(fixed2(Some(decimal("-2.345"))), "-2.35");
        assert_eq!(fixed2(Some(decimal("2.344"))), "2.34");
    }

    #[test]
    fn test_fixed2_pads_to_two_digits() {
        assert_eq!(fixed2(Some(decimal("75"))), "75.00");
        assert_eq!(fixed2(Some(decimal("7.5"))), "7.50");
        assert_eq!(fixed2(None), "0.00");
    }

    #[test]
    fn test_count_defaults_to_zero() {
        assert_eq!(count(Some(12)), "12");
        assert_eq!(count(None), "0");
    }

    #[test]
    fn test_percentage_formats_and_clamps() {
        assert_eq!(percentage(Some(decimal("60"))), "60.00%");
        assert_eq!(percentage(Some(decimal("66.666"))), "66.67%");
        assert_eq!(percentage(Some(decimal("100.4"))), "100.00%");
        assert_eq!(percentage(Some(decimal("-3"))), "0.00%");
        assert_eq!(percentage(None), "0%");
    }

    #[test]
    fn test_enum_label() {
        assert_eq!(enum_label("en_progreso"), "En progreso");
        assert_eq!(enum_label("activo"), "Activo");
        assert_eq!(enum_label("tecnologia_informacion"), "Tecnologia informacion");
        assert_eq!(enum_label(""), "");
    }

    #[test]
    fn test_dollar_keeps_stored_scale() {
        assert_eq!(currency(Some(decimal("1500.5")), CurrencyStyle::Dollar), "$1500.5");
        assert_eq!(currency(Some(decimal("1500.50")), CurrencyStyle::Dollar), "$1500.50");
        assert_eq!(currency(None, CurrencyStyle::Dollar), "$0");
    }

    #[test]
    fn test_bolivianos_uses_two_decimals() {
        assert_eq!(currency(Some(decimal("1500.5")), CurrencyStyle::Bolivianos), "Bs. 1500.50");
        assert_eq!(currency(Some(decimal("12000")), CurrencyStyle::Bolivianos), "Bs. 12000.00");
        assert_eq!(currency(None, CurrencyStyle::Bolivianos), "Bs. 0.00");
    }

    #[test]
    fn test_date_and_placeholders() {
        assert_eq!(date(NaiveDate::from_ymd_opt(2025, 3, 7)), "07/03/2025");
        assert_eq!(date(None), "-");
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("A")), "A");
        assert_eq!(or_dash(None), "-");
    }

    proptest! {
        #[test]
        fn prop_percentage_stays_within_bounds(mantissa in -1_000_000i64..1_000_000, scale in 0u32..4) {
            let text = percentage(Some(Decimal::new(mantissa, scale)));
            let number = Decimal::from_str(text.trim_end_matches('%')).unwrap();
            prop_assert!(number >= Decimal::ZERO);
            prop_assert!(number <= Decimal::ONE_HUNDRED);
            prop_assert_eq!(text.split('.').nth(1).map(|d| d.len()), Some(3));
        }

        #[test]
        fn prop_bolivianos_always_has_two_decimals(mantissa in 0i64..100_000_000, scale in 0u32..5) {
            let text = currency(Some(Decimal::new(mantissa, scale)), CurrencyStyle::Bolivianos);
            prop_assert!(text.starts_with("Bs. "));
            let decimals = text.rsplit('.').next().unwrap();
            prop_assert_eq!(decimals.len(), 2);
            prop_assert!(!text.contains(','));
        }

        #[test]
        fn prop_fixed2_is_within_half_a_cent(mantissa in -10_000_000i64..10_000_000, scale in 0u32..6) {
            let value = Decimal::new(mantissa, scale);
            let shown = Decimal::from_str(&fixed2(Some(value))).unwrap();
            prop_assert!((shown - value).abs() <= Decimal::new(5, 3));
        }
    }
}
