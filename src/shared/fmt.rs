//! Number formatting for human-readable display of prices and rates.

use crate::shared::Change;
use rust_decimal::prelude::*;

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.as_str()),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn decimal_places(value: &Decimal) -> u32 {
    let abs = value.abs();
    if abs >= Decimal::ONE_HUNDRED {
        return 0;
    }
    if abs >= Decimal::ONE || abs.is_zero() {
        return 2;
    }

    // Leading zeros after the point, plus four significant digits.
    let mut zeros = 0;
    let mut scaled = abs;
    while scaled < Decimal::ONE && zeros < 8 {
        scaled *= Decimal::TEN;
        zeros += 1;
    }
    (zeros + 3).min(8)
}

/// Format a price with auto-detected decimal places.
pub fn price(value: &Decimal) -> String {
    let places = decimal_places(value);
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    display_formatted_string(format!("{:.1$}", rounded, places as usize))
}

/// Format a fractional change rate (`0.0123`) as a signed percentage (`+1.23%`).
pub fn signed_pct(rate: &Decimal, change: Change) -> String {
    let pct = (rate.abs() * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}%", change.sign(), pct)
}

/// Abbreviate large amounts with K/M/B suffixes.
pub fn compact(value: &Decimal) -> String {
    let abs = value.abs();
    let (divisor, suffix) = if abs >= Decimal::from(1_000_000_000u64) {
        (Decimal::from(1_000_000_000u64), "B")
    } else if abs >= Decimal::from(1_000_000u64) {
        (Decimal::from(1_000_000u64), "M")
    } else if abs >= Decimal::from(1_000u64) {
        (Decimal::from(1_000u64), "K")
    } else {
        return price(value);
    };
    let scaled =
        (value / divisor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{}", display_formatted_string(format!("{:.2}", scaled)), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_formatted_string_integers() {
        assert_eq!(display_formatted_string("1234567".to_string()), "1,234,567");
        assert_eq!(display_formatted_string("123".to_string()), "123");
        assert_eq!(display_formatted_string("-123456".to_string()), "-123,456");
    }

    #[test]
    fn test_display_formatted_string_trims_zeros() {
        assert_eq!(display_formatted_string("1234.5000".to_string()), "1,234.5");
        assert_eq!(display_formatted_string("1000.000".to_string()), "1,000");
    }

    #[test]
    fn test_price_krw_scale() {
        assert_eq!(price(&d("58912000")), "58,912,000");
        assert_eq!(price(&d("12.345")), "12.35");
    }

    #[test]
    fn test_price_small_values_keep_significant_digits() {
        assert_eq!(price(&d("0.00012345")), "0.0001235");
    }

    #[test]
    fn test_signed_pct() {
        assert_eq!(signed_pct(&d("0.0123"), Change::Rise), "+1.23%");
        assert_eq!(signed_pct(&d("0.05"), Change::Fall), "-5.00%");
        assert_eq!(signed_pct(&d("0"), Change::Even), "0.00%");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(&d("1234567890")), "1.23B");
        assert_eq!(compact(&d("2500000")), "2.5M");
        assert_eq!(compact(&d("950")), "950");
    }
}
