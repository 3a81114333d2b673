//! Holdings and profit models for the mark-to-market estimate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;

/// Grams held and today's rate per gram for one metal, as entered by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalHolding {
    pub grams: Option<Decimal>,
    pub rate: Option<Decimal>,
}

impl MetalHolding {
    pub fn new(grams: Decimal, rate: Decimal) -> Self {
        Self {
            grams: Some(grams),
            rate: Some(rate),
        }
    }

    /// Builds a holding from raw form text; non-numeric text counts as absent.
    pub fn from_inputs(grams: &str, rate: &str) -> Self {
        Self {
            grams: parse_decimal(grams),
            rate: parse_decimal(rate),
        }
    }

    /// Current value when both inputs are present and strictly positive.
    pub fn market_value(&self) -> Option<Decimal> {
        match (self.grams, self.rate) {
            (Some(grams), Some(rate)) if grams > Decimal::ZERO && rate > Decimal::ZERO => {
                grams.checked_mul(rate)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holdings {
    pub gold: MetalHolding,
    pub silver: MetalHolding,
}

/// Estimated profit per metal. Zero means "not yet computable".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profits {
    pub gold: Decimal,
    pub silver: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitDirection {
    Positive,
    Negative,
    Flat,
}

impl ProfitDirection {
    pub fn of(value: Decimal) -> Self {
        if value > Decimal::ZERO {
            ProfitDirection::Positive
        } else if value < Decimal::ZERO {
            ProfitDirection::Negative
        } else {
            ProfitDirection::Flat
        }
    }
}
