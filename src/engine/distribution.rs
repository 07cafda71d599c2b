//! Condition and category distributions over the tool collection

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Tool, ToolCategory, ToolCondition};

/// One distribution bucket with its share of the unfiltered total
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
    /// count / total × 100, against the unfiltered tool count
    pub percentage: f64,
}

/// Tools grouped by condition, descending by count. Tools without a
/// condition land in an explicit unknown bucket. Empty input produces an
/// empty distribution (no division by zero).
pub fn by_condition(tools: &[Tool]) -> Vec<DistributionEntry> {
    tally(tools, |t| {
        t.fields.condition.unwrap_or(ToolCondition::Unknown).to_string()
    })
}

/// Tools grouped by category, descending by count, unknown bucket included.
pub fn by_category(tools: &[Tool]) -> Vec<DistributionEntry> {
    tally(tools, |t| {
        t.fields.category.unwrap_or(ToolCategory::Unknown).to_string()
    })
}

fn tally(tools: &[Tool], label_of: impl Fn(&Tool) -> String) -> Vec<DistributionEntry> {
    let total = tools.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    for tool in tools {
        let label = label_of(tool);
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}
