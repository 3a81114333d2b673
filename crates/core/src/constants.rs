/// Decimal precision for display and for derived invoice totals
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default polling interval for the revenue dashboard
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Trailing window used by the daily spend trend
pub const DAILY_TREND_WINDOW_DAYS: i64 = 30;

/// Label used for records without a metal type
pub const UNKNOWN_METAL_LABEL: &str = "UNKNOWN";

pub const GOLD_PREFIX: &str = "GOLD";
pub const SILVER_PREFIX: &str = "SILVER";

/// Metal types offered by the manual entry form
pub const MANUAL_ENTRY_METAL_TYPES: &[&str] = &["SILVER24", "GOLD24"];

/// Status message shown when a dashboard fetch fails
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load invoices";
