use rust_decimal::Decimal;
use std::str::FromStr;

/// Smallest magnitude a `Decimal` can hold (scale 28).
const DECIMAL_RESOLUTION: f64 = 1e-28;

/// Parses user- or API-supplied text into a decimal.
///
/// Total over its input: blank, non-numeric or partially numeric text
/// (`"50g"`) yields `None` instead of a NaN-like value. Numbers too small for
/// `Decimal` (`"1e-30"`) clamp to zero; numbers too large yield `None`.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .or_else(|| clamp_below_resolution(trimmed))
}

fn clamp_below_resolution(text: &str) -> Option<Decimal> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() < DECIMAL_RESOLUTION => Some(Decimal::ZERO),
        _ => None,
    }
}

/// Parses a value that must be strictly positive to be usable.
pub fn parse_positive_decimal(value: &str) -> Option<Decimal> {
    parse_decimal(value).filter(|v| *v > Decimal::ZERO)
}
