//! Sorted and filtered projections over the loaded collections
//!
//! Pure view functions: they borrow from the collections, never mutate
//! them, and are recomputed from scratch on every call.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::{Assignment, MaintenanceEntry, Tool, ToolCategory, ToolCondition};

use super::due;

/// Tool list filter; all criteria compose with AND
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
pub struct ToolFilter {
    /// Free-text query matched case-insensitively against name,
    /// manufacturer and serial number (any field may match)
    pub q: Option<String>,
    pub category: Option<ToolCategory>,
    pub condition: Option<ToolCondition>,
}

/// Filter and sort the tool list: condition severity worst-first (tools
/// without a condition last), then name under a case-folded collation.
pub fn tool_list<'a>(tools: &'a [Tool], filter: &ToolFilter) -> Vec<&'a Tool> {
    let query = filter.q.as_deref().map(str::to_lowercase);

    let mut result: Vec<&Tool> = tools
        .iter()
        .filter(|t| match &query {
            Some(q) if !q.is_empty() => [
                t.fields.name.as_deref(),
                t.fields.manufacturer.as_deref(),
                t.fields.serial_number.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(q)),
            _ => true,
        })
        .filter(|t| filter.category.map_or(true, |c| t.fields.category == Some(c)))
        .filter(|t| filter.condition.map_or(true, |c| t.fields.condition == Some(c)))
        .collect();

    result.sort_by(|a, b| {
        severity_rank(a)
            .cmp(&severity_rank(b))
            .then_with(|| a.display_name().to_lowercase().cmp(&b.display_name().to_lowercase()))
    });
    result
}

fn severity_rank(tool: &Tool) -> u8 {
    tool.fields
        .condition
        .unwrap_or(ToolCondition::Unknown)
        .severity()
}

/// Open assignments, overdue first, then by ascending planned return.
/// A missing planned-return date sorts as the empty string (earliest).
pub fn active_assignments<'a>(
    assignments: &'a [Assignment],
    today: NaiveDate,
) -> Vec<&'a Assignment> {
    let mut result: Vec<&Assignment> = assignments.iter().filter(|a| a.is_open()).collect();
    result.sort_by(|a, b| {
        let a_overdue = due::is_overdue(a.fields.planned_return.as_deref(), today);
        let b_overdue = due::is_overdue(b.fields.planned_return.as_deref(), today);
        b_overdue
            .cmp(&a_overdue)
            .then_with(|| {
                a.fields
                    .planned_return
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.fields.planned_return.as_deref().unwrap_or(""))
            })
    });
    result
}

/// Maintenance entries with a parseable next-due date, overdue first, then
/// ascending by next-due day, truncated to `limit`. Entries without a
/// next-due date are excluded entirely.
pub fn upcoming_maintenance<'a>(
    entries: &'a [MaintenanceEntry],
    today: NaiveDate,
    limit: usize,
) -> Vec<&'a MaintenanceEntry> {
    let mut dated: Vec<(&MaintenanceEntry, NaiveDate)> = entries
        .iter()
        .filter_map(|e| {
            let day = e.fields.next_due.as_deref().and_then(due::parse_day)?;
            Some((e, day))
        })
        .collect();
    dated.sort_by(|a, b| {
        let a_overdue = a.1 < today;
        let b_overdue = b.1 < today;
        b_overdue.cmp(&a_overdue).then_with(|| a.1.cmp(&b.1))
    });
    dated.into_iter().map(|(e, _)| e).take(limit).collect()
}
