//! Indian Rupee display formatting.
//!
//! Mirrors `en-IN` currency formatting: lakh/crore digit grouping, a `₹`
//! prefix and two fraction digits. Formatting never fails; a `None` amount
//! renders as [`ZERO_CURRENCY`].

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

pub const RUPEE_SYMBOL: &str = "₹";

/// Fallback rendering for a missing amount.
pub const ZERO_CURRENCY: &str = "₹0";

/// Formats an optional amount as INR, e.g. `₹1,23,456.70`.
pub fn format_inr(value: Option<Decimal>) -> String {
    match value {
        Some(amount) => format_amount(amount),
        None => ZERO_CURRENCY.to_string(),
    }
}

/// Formats a raw numeric string as INR, returning the raw text unchanged when
/// it is not a number.
pub fn format_inr_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ZERO_CURRENCY.to_string();
    }
    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(amount) => format_amount(amount),
        Err(_) => raw.to_string(),
    }
}

fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut plain = rounded.abs();
    plain.rescale(DISPLAY_DECIMAL_PRECISION);
    let text = plain.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!(
        "{}{}{}.{}",
        sign,
        RUPEE_SYMBOL,
        group_indian(integer),
        fraction
    )
}

/// Groups integer digits the Indian way: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
