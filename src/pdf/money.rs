use std::str::FromStr;

use rust_decimal::Decimal;

use crate::core::clean;

/// Format an amount in the German convention: '.' as thousands separator,
/// ',' as decimal separator, exactly two decimal places.
///
/// ```
/// use bestellung::pdf::format_eur;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_eur(dec!(0)), "0,00");
/// assert_eq!(format_eur(dec!(1234.5)), "1.234,50");
/// ```
pub fn format_eur(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    let plain = format!("{rounded:.2}");
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped},{frac_part}")
}

/// Format a monetary value of unreliable textual origin.
///
/// Blank or placeholder input and anything that does not parse as a number
/// yield `""` — formatting never fails.
pub fn format_eur_lossy(raw: &str) -> String {
    let Some(value) = clean(raw) else {
        return String::new();
    };
    Decimal::from_str(&value)
        .or_else(|_| Decimal::from_scientific(&value))
        .map(format_eur)
        .unwrap_or_default()
}
