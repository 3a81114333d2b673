use log::debug;
use rust_decimal::Decimal;

use crate::analytics::InvestedTotals;
use crate::valuation::valuation_model::{Holdings, MetalHolding, Profits};

/// Naive mark-to-market profit for one metal: `grams * rate - invested`.
///
/// All invested capital is valued at the single current rate; there is no
/// lot accounting. Returns zero unless grams, rate and the invested total
/// are all strictly positive.
pub fn calculate_profit(invested: Decimal, holding: &MetalHolding) -> Decimal {
    if invested <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match holding.market_value() {
        Some(current_value) => current_value.saturating_sub(invested),
        None => Decimal::ZERO,
    }
}

pub fn calculate_profits(invested: &InvestedTotals, holdings: &Holdings) -> Profits {
    let profits = Profits {
        gold: calculate_profit(invested.gold, &holdings.gold),
        silver: calculate_profit(invested.silver, &holdings.silver),
    };
    debug!(
        "Profit estimate: gold {} (invested {}), silver {} (invested {})",
        profits.gold, invested.gold, profits.silver, invested.silver
    );
    profits
}
