pub mod currency_format;
pub mod decimal_utils;
pub mod time_utils;

pub use currency_format::{format_inr, format_inr_str};
pub use decimal_utils::{parse_decimal, parse_positive_decimal};
