use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an invoice date string into a naive (UTC) timestamp.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 and `YYYY-MM-DDTHH:MM:SS[.fff]`. Anything
/// else is treated as a missing date.
pub fn parse_invoice_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(start_of_day(date));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Parses a filter bound given as a calendar date.
pub fn parse_date_bound(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last millisecond of the given day (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_milli_opt(23, 59, 59, 999)
}

/// Start of the trailing window of `days` days ending at `now`. Saturates at
/// the earliest representable instant.
pub fn trailing_window_start(now: NaiveDateTime, days: i64) -> NaiveDateTime {
    Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(NaiveDateTime::MIN)
}

pub fn month_key(at: NaiveDateTime) -> String {
    at.format("%Y-%m").to_string()
}

pub fn day_key(at: NaiveDateTime) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Evaluation instant used by time-windowed aggregations.
pub fn evaluation_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
