//! Calendar-day overdue and due-soon classification
//!
//! All comparisons run at calendar-day precision. Wire dates are strings
//! that may be a plain `YYYY-MM-DD` or a full ISO timestamp; parsing
//! truncates to the date portion and treats anything unparseable as absent.

use chrono::{Duration, NaiveDate};

/// Forward-looking window for "due soon" maintenance, in calendar days
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

/// Parse a wire date down to a calendar day. Accepts `YYYY-MM-DD` and ISO
/// timestamps (`YYYY-MM-DDTHH:MM:SS...`); returns `None` for anything else.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// A date is overdue iff it lies strictly before today. Same-day is not
/// overdue; absent or unparseable dates are never overdue.
pub fn is_overdue(date: Option<&str>, today: NaiveDate) -> bool {
    date.and_then(parse_day).is_some_and(|day| day < today)
}

/// Whether a date falls on or before `today + window_days`. Inclusive at
/// the far edge, and dates already in the past count as well (overdue is a
/// subset of due-soon).
pub fn is_due_within(date: Option<&str>, today: NaiveDate, window_days: i64) -> bool {
    date.and_then(parse_day)
        .is_some_and(|day| day <= today + Duration::days(window_days))
}

/// Signed day distance from today to the date (negative = overdue)
pub fn days_until(date: Option<&str>, today: NaiveDate) -> Option<i64> {
    date.and_then(parse_day)
        .map(|day| (day - today).num_days())
}
