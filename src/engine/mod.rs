//! Derived-state engine
//!
//! Pure, synchronous computation over an immutable snapshot of the five
//! record collections. Nothing here performs I/O or reads a clock; the
//! reference day is always an argument, so every function is reentrant and
//! deterministic.

pub mod availability;
pub mod distribution;
pub mod due;
pub mod format;
pub mod resolver;
pub mod views;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Assignment, Employee, MaintenanceEntry, MaintenanceType, Project, Tool};

use distribution::DistributionEntry;

/// Dashboard preview cap for active assignments
pub const ASSIGNMENT_PREVIEW: usize = 8;
/// Dashboard preview cap for upcoming maintenance
pub const MAINTENANCE_PREVIEW: usize = 5;

/// Immutable snapshot of the five collections loaded from the store.
/// Built once per reload; all derived state is computed from it.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub tools: Vec<Tool>,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    pub assignments: Vec<Assignment>,
    pub maintenance: Vec<MaintenanceEntry>,
}

/// Tool availability counters
#[derive(Debug, Serialize, ToSchema)]
pub struct ToolKpis {
    pub total: usize,
    pub available: usize,
    pub assigned: usize,
    /// Defective or needs-repair
    pub defective: usize,
}

/// Assignment counters
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentKpis {
    pub active: usize,
    /// Open assignments whose planned return lies before today
    pub overdue: usize,
}

/// Maintenance counters
#[derive(Debug, Serialize, ToSchema)]
pub struct MaintenanceKpis {
    pub total: usize,
    /// Next-due date before today
    pub overdue: usize,
    /// Next-due date within the 30-day window (overdue included)
    pub due_soon: usize,
    /// Costs of maintenance performed in the trailing 30 days
    pub costs_last_30_days: f64,
    pub costs_display: String,
}

/// One row of the active-assignments preview, with resolved display names.
/// Unresolved references stay `None`; rendering a placeholder is the
/// consumer's job.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActiveAssignmentView {
    pub record_id: String,
    pub tool_name: Option<String>,
    pub employee_name: Option<String>,
    pub project_name: Option<String>,
    pub planned_return: Option<String>,
    pub planned_return_display: Option<String>,
    pub overdue: bool,
}

/// One row of the upcoming-maintenance preview
#[derive(Debug, Serialize, ToSchema)]
pub struct UpcomingMaintenanceView {
    pub record_id: String,
    pub tool_name: Option<String>,
    pub maintenance_type: String,
    pub next_due: String,
    pub next_due_display: String,
    /// Signed day distance from today (negative = overdue)
    pub days_remaining: i64,
    pub overdue: bool,
}

/// The full derived dashboard state
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub tools: ToolKpis,
    pub assignments: AssignmentKpis,
    pub maintenance: MaintenanceKpis,
    /// Combined count of items needing attention: defective tools plus
    /// overdue maintenance plus overdue open assignments, no dedup across
    /// buckets
    pub attention: usize,
    pub employee_count: usize,
    pub project_count: usize,
    pub tools_by_condition: Vec<DistributionEntry>,
    pub tools_by_category: Vec<DistributionEntry>,
    pub active_assignments: Vec<ActiveAssignmentView>,
    pub upcoming_maintenance: Vec<UpcomingMaintenanceView>,
}

/// Compute the whole dashboard state for the given reference day.
pub fn summarize(snapshot: &Snapshot, today: NaiveDate) -> DashboardSummary {
    let avail = availability::classify(&snapshot.tools, &snapshot.assignments);

    let open: Vec<&Assignment> = snapshot
        .assignments
        .iter()
        .filter(|a| a.is_open())
        .collect();
    let overdue_assignments = open
        .iter()
        .filter(|a| due::is_overdue(a.fields.planned_return.as_deref(), today))
        .count();

    let overdue_maintenance = snapshot
        .maintenance
        .iter()
        .filter(|e| due::is_overdue(e.fields.next_due.as_deref(), today))
        .count();
    let due_soon = snapshot
        .maintenance
        .iter()
        .filter(|e| {
            due::is_due_within(e.fields.next_due.as_deref(), today, due::DUE_SOON_WINDOW_DAYS)
        })
        .count();
    let costs_last_30_days = maintenance_costs_since(
        &snapshot.maintenance,
        today - Duration::days(due::DUE_SOON_WINDOW_DAYS),
    );

    let attention = avail.defective + overdue_maintenance + overdue_assignments;

    let active_assignments = views::active_assignments(&snapshot.assignments, today)
        .into_iter()
        .take(ASSIGNMENT_PREVIEW)
        .map(|a| assignment_view(a, snapshot, today))
        .collect();

    let upcoming_maintenance =
        views::upcoming_maintenance(&snapshot.maintenance, today, MAINTENANCE_PREVIEW)
            .into_iter()
            .map(|e| maintenance_view(e, snapshot, today))
            .collect();

    DashboardSummary {
        tools: ToolKpis {
            total: avail.total,
            available: avail.available,
            assigned: avail.assigned,
            defective: avail.defective,
        },
        assignments: AssignmentKpis {
            active: open.len(),
            overdue: overdue_assignments,
        },
        maintenance: MaintenanceKpis {
            total: snapshot.maintenance.len(),
            overdue: overdue_maintenance,
            due_soon,
            costs_last_30_days,
            costs_display: format::euros(costs_last_30_days),
        },
        attention,
        employee_count: snapshot.employees.len(),
        project_count: snapshot.projects.len(),
        tools_by_condition: distribution::by_condition(&snapshot.tools),
        tools_by_category: distribution::by_category(&snapshot.tools),
        active_assignments,
        upcoming_maintenance,
    }
}

/// Sum of maintenance costs performed strictly after `since`.
pub fn maintenance_costs_since(entries: &[MaintenanceEntry], since: NaiveDate) -> f64 {
    entries
        .iter()
        .filter(|e| {
            e.fields
                .performed_on
                .as_deref()
                .and_then(due::parse_day)
                .is_some_and(|day| day > since)
        })
        .filter_map(|e| e.fields.cost)
        .sum()
}

fn assignment_view(
    assignment: &Assignment,
    snapshot: &Snapshot,
    today: NaiveDate,
) -> ActiveAssignmentView {
    let tool = resolver::resolve(assignment.fields.tool.as_deref(), &snapshot.tools);
    let employee = resolver::resolve(assignment.fields.employee.as_deref(), &snapshot.employees);
    let project = resolver::resolve(assignment.fields.project.as_deref(), &snapshot.projects);

    ActiveAssignmentView {
        record_id: assignment.record_id.clone(),
        tool_name: tool.map(|t| t.display_name().to_string()),
        employee_name: employee.map(Employee::display_name),
        project_name: project.map(|p| p.display_name().to_string()),
        planned_return: assignment.fields.planned_return.clone(),
        planned_return_display: assignment
            .fields
            .planned_return
            .as_deref()
            .map(format::day),
        overdue: due::is_overdue(assignment.fields.planned_return.as_deref(), today),
    }
}

fn maintenance_view(
    entry: &MaintenanceEntry,
    snapshot: &Snapshot,
    today: NaiveDate,
) -> UpcomingMaintenanceView {
    let tool = resolver::resolve(entry.fields.tool.as_deref(), &snapshot.tools);
    // views::upcoming_maintenance only yields entries with a parseable date
    let next_due = entry.fields.next_due.clone().unwrap_or_default();

    UpcomingMaintenanceView {
        record_id: entry.record_id.clone(),
        tool_name: tool.map(|t| t.display_name().to_string()),
        maintenance_type: entry
            .fields
            .maintenance_type
            .unwrap_or(MaintenanceType::Miscellaneous)
            .to_string(),
        next_due_display: format::day(&next_due),
        days_remaining: due::days_until(Some(next_due.as_str()), today).unwrap_or(0),
        overdue: due::is_overdue(Some(next_due.as_str()), today),
        next_due,
    }
}
