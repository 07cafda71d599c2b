//! Reference resolution
//!
//! Turns a locator string into the referenced record, if it is present in
//! the loaded collection. Absence is a first-class result: deleted records,
//! malformed locators and missing fields all resolve to `None`.

use crate::models::record::Record;
use crate::models::reference::extract_record_id;

/// Resolve a locator against a loaded collection.
pub fn resolve<'a, F>(locator: Option<&str>, records: &'a [Record<F>]) -> Option<&'a Record<F>> {
    let id = extract_record_id(locator?)?;
    records.iter().find(|record| record.record_id == id)
}
