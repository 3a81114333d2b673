//! Valuation stage: profit estimate from invested totals and user holdings.

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::*;
pub use valuation_model::*;
