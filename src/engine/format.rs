//! Display formatting helpers (German locale, as the original dashboard)

use chrono::NaiveDate;

use super::due::parse_day;

/// Format a wire date as `dd.MM.yyyy`; unparseable input is echoed back.
pub fn day(raw: &str) -> String {
    match parse_day(raw) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Format a calendar day as `dd.MM.yyyy`.
pub fn naive_day(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format an amount as a two-decimal euro value.
pub fn euros(amount: f64) -> String {
    format!("{:.2} €", amount)
}
