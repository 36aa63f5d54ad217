//! Brazilian real formatting.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Shown on a balance card whose amount is missing or zero.
pub const ZERO_PLACEHOLDER: &str = "R$ 0,00";

const SYMBOL: &str = "R$";

/// Formats an amount as Brazilian reais: `R$ 1.234,56`.
///
/// Rounds half away from zero to the cent, applied to the amount as written in decimal
/// (`1.005` becomes `R$ 1,01`), and prefixes negative amounts with `-` (`-R$ 5,00`).
/// Never fails: NaN renders as `R$ NaN`, infinities as `R$ ∞`.
pub fn format_brl(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{} NaN", SYMBOL);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{} ∞", sign, SYMBOL);
    }

    let (units, cents) = rounded_digits(amount.abs());
    let is_zero = cents == "00" && units.chars().all(|c| c == '0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{}{} {},{}", sign, SYMBOL, group_thousands(&units), cents)
}

/// Integer and cent digits of a non-negative amount rounded to two places.
fn rounded_digits(magnitude: f64) -> (String, String) {
    // `Display` for f64 is the shortest text that reads back to the same value.
    let decimal = Decimal::from_str(&magnitude.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(magnitude));

    let text = match decimal {
        Some(value) => value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        // Outside Decimal's range (about 7.9e28): the float's exact expansion
        None => format!("{:.2}", magnitude),
    };

    match text.split_once('.') {
        Some((units, cents)) => (units.to_string(), format!("{:0<2}", cents)),
        None => (text, "00".to_string()),
    }
}

/// `1234567` -> `1.234.567`
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
