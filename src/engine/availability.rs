//! Tool availability classification

use std::collections::HashSet;

use crate::models::reference::extract_record_id;
use crate::models::{Assignment, Tool};

/// Availability partition over the tool collection.
///
/// A tool can be both assigned and defective; each tool is counted at most
/// once per bucket, and `available` saturates at zero so the overlap never
/// produces a negative count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub total: usize,
    /// Tools that are the target of at least one open assignment
    pub assigned: usize,
    /// Tools whose condition is defective or needs-repair
    pub defective: usize,
    /// total − assigned − defective, floored at zero
    pub available: usize,
}

/// Identifiers of tools referenced by at least one open assignment.
pub fn open_tool_ids(assignments: &[Assignment]) -> HashSet<&str> {
    assignments
        .iter()
        .filter(|a| a.is_open())
        .filter_map(|a| extract_record_id(a.fields.tool.as_deref()?))
        .collect()
}

/// Classify the tool collection against the current assignments.
pub fn classify(tools: &[Tool], assignments: &[Assignment]) -> Availability {
    let open = open_tool_ids(assignments);

    let total = tools.len();
    let assigned = tools
        .iter()
        .filter(|t| open.contains(t.record_id.as_str()))
        .count();
    let defective = tools.iter().filter(|t| t.needs_attention()).count();
    let available = total.saturating_sub(assigned).saturating_sub(defective);

    Availability {
        total,
        assigned,
        defective,
        available,
    }
}
