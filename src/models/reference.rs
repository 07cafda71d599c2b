//! Legacy record locator adapter
//!
//! Cross-entity references arrive on the wire as record URLs of the form
//! `{base}/apps/{app_id}/records/{record_id}`. The record identifier is the
//! trailing 24-hex-character segment; anything else is not a reference.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a locator whose tail is exactly 24 contiguous hex characters.
/// The leading group rules out longer hex runs (a 25-character run is not
/// a record identifier).
static TRAILING_RECORD_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[^0-9a-f])([0-9a-f]{24})$").unwrap());

/// Extract the record identifier from a locator string.
///
/// Returns `None` for anything that does not end in exactly 24 hex
/// characters; malformed locators are an expected input, never an error.
pub fn extract_record_id(locator: &str) -> Option<&str> {
    TRAILING_RECORD_ID
        .captures(locator)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build the locator URL for a record, for writing references back to
/// the store.
pub fn record_url(base_url: &str, app_id: &str, record_id: &str) -> String {
    format!("{}/apps/{}/records/{}", base_url, app_id, record_id)
}
