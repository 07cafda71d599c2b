//! Derived-state engine tests
//!
//! Pure tests over hand-built snapshots; no store or server required.

use chrono::NaiveDate;

use toolkeeper_server::engine::{
    self, availability, distribution, due, format, resolver, views, Snapshot,
};
use toolkeeper_server::models::reference::{extract_record_id, record_url};
use toolkeeper_server::models::{
    Assignment, AssignmentFields, Employee, EmployeeFields, MaintenanceEntry, MaintenanceFields,
    MaintenanceType, Project, ProjectFields, Tool, ToolCategory, ToolCondition, ToolFields,
};

const BASE: &str = "https://my.living-apps.de/rest";
const TOOLS_APP: &str = "696f8c7334d65b459b907abf";

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tool(id: &str, name: &str, condition: Option<ToolCondition>) -> Tool {
    Tool {
        record_id: id.to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: ToolFields {
            name: Some(name.to_string()),
            condition,
            ..Default::default()
        },
    }
}

fn assignment(id: &str, tool_id: &str, planned: Option<&str>, returned: Option<&str>) -> Assignment {
    Assignment {
        record_id: id.to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: AssignmentFields {
            tool: Some(record_url(BASE, TOOLS_APP, tool_id)),
            planned_return: planned.map(str::to_string),
            returned_on: returned.map(str::to_string),
            ..Default::default()
        },
    }
}

fn maintenance(id: &str, next_due: Option<&str>, cost: Option<f64>) -> MaintenanceEntry {
    MaintenanceEntry {
        record_id: id.to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: MaintenanceFields {
            next_due: next_due.map(str::to_string),
            cost,
            ..Default::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Reference extraction and resolution
// ---------------------------------------------------------------------------

#[test]
fn extracts_trailing_record_id_from_locator_url() {
    let url = format!("{}/apps/{}/records/{}", BASE, TOOLS_APP, "abc123abc123abc123abc123");
    assert_eq!(extract_record_id(&url), Some("abc123abc123abc123abc123"));
}

#[test]
fn bare_24_hex_string_is_a_valid_locator() {
    assert_eq!(
        extract_record_id("abc123abc123abc123abc123"),
        Some("abc123abc123abc123abc123")
    );
}

#[test]
fn hex_case_is_ignored() {
    assert_eq!(
        extract_record_id("ABC123ABC123ABC123ABC123"),
        Some("ABC123ABC123ABC123ABC123")
    );
}

#[test]
fn rejects_tails_that_are_not_exactly_24_hex_chars() {
    // 23 characters
    assert_eq!(extract_record_id("abc123abc123abc123abc12"), None);
    // 25-character run: not a record identifier
    assert_eq!(extract_record_id("aabc123abc123abc123abc123"), None);
    assert_eq!(
        extract_record_id("https://example.org/records/aabc123abc123abc123abc123"),
        None
    );
    // non-hex tail
    assert_eq!(extract_record_id("abc123abc123abc123abc12g"), None);
    assert_eq!(extract_record_id(""), None);
    assert_eq!(extract_record_id("https://example.org/records/"), None);
}

#[test]
fn resolver_finds_record_by_locator() {
    let tools = vec![
        tool("aaaaaaaaaaaaaaaaaaaaaaaa", "Bohrmaschine", None),
        tool("bbbbbbbbbbbbbbbbbbbbbbbb", "Multimeter", None),
    ];
    let locator = record_url(BASE, TOOLS_APP, "bbbbbbbbbbbbbbbbbbbbbbbb");

    let found = resolver::resolve(Some(&locator), &tools).unwrap();
    assert_eq!(found.record_id, "bbbbbbbbbbbbbbbbbbbbbbbb");
}

#[test]
fn resolver_returns_none_for_missing_or_malformed() {
    let tools = vec![tool("aaaaaaaaaaaaaaaaaaaaaaaa", "Bohrmaschine", None)];

    // referenced record deleted from the collection
    let gone = record_url(BASE, TOOLS_APP, "cccccccccccccccccccccccc");
    assert!(resolver::resolve(Some(&gone), &tools).is_none());
    // malformed locator
    assert!(resolver::resolve(Some("not a locator"), &tools).is_none());
    // absent field
    assert!(resolver::resolve(None, &tools).is_none());
}

// ---------------------------------------------------------------------------
// Due-date classification
// ---------------------------------------------------------------------------

#[test]
fn same_day_is_not_overdue() {
    let today = day(2026, 8, 30);
    assert!(!due::is_overdue(Some("2026-08-30"), today));
    assert!(due::is_overdue(Some("2026-08-29"), today));
    assert!(!due::is_overdue(Some("2026-08-31"), today));
}

#[test]
fn absent_or_unparseable_dates_are_never_overdue() {
    let today = day(2026, 8, 30);
    assert!(!due::is_overdue(None, today));
    assert!(!due::is_overdue(Some(""), today));
    assert!(!due::is_overdue(Some("bald"), today));
}

#[test]
fn iso_timestamps_are_truncated_to_the_day() {
    let today = day(2026, 8, 30);
    assert!(due::is_overdue(Some("2026-08-29T23:59:59"), today));
    assert!(!due::is_overdue(Some("2026-08-30T00:00:00"), today));
    assert_eq!(due::parse_day(" 2026-08-30T12:00:00 "), Some(today));
}

#[test]
fn due_soon_window_is_inclusive_at_thirty_days() {
    let today = day(2026, 8, 1);
    // exactly 30 days out: inside
    assert!(due::is_due_within(Some("2026-08-31"), today, 30));
    // 31 days out: outside
    assert!(!due::is_due_within(Some("2026-09-01"), today, 30));
    // overdue dates count as due-soon as well
    assert!(due::is_due_within(Some("2026-07-01"), today, 30));
    assert!(!due::is_due_within(None, today, 30));
}

#[test]
fn days_until_is_signed() {
    let today = day(2026, 8, 30);
    assert_eq!(due::days_until(Some("2026-09-04"), today), Some(5));
    assert_eq!(due::days_until(Some("2026-08-28"), today), Some(-2));
    assert_eq!(due::days_until(None, today), None);
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

#[test]
fn availability_partitions_the_tool_collection() {
    let tools = vec![
        tool("aaaaaaaaaaaaaaaaaaaaaaaa", "Bohrmaschine", Some(ToolCondition::Good)),
        tool("bbbbbbbbbbbbbbbbbbbbbbbb", "Multimeter", Some(ToolCondition::Defective)),
        tool("cccccccccccccccccccccccc", "Leiter", Some(ToolCondition::New)),
        tool("dddddddddddddddddddddddd", "Kabeltrommel", None),
    ];
    let assignments = vec![
        assignment("e1aaaaaaaaaaaaaaaaaaaaaa", "aaaaaaaaaaaaaaaaaaaaaaaa", None, None),
        // closed assignment does not count
        assignment("e2aaaaaaaaaaaaaaaaaaaaaa", "cccccccccccccccccccccccc", None, Some("2026-08-01")),
    ];

    let avail = availability::classify(&tools, &assignments);
    assert_eq!(avail.total, 4);
    assert_eq!(avail.assigned, 1);
    assert_eq!(avail.defective, 1);
    assert_eq!(avail.available, 2);
}

#[test]
fn available_count_saturates_when_buckets_overlap() {
    // single tool, both assigned and defective
    let tools = vec![tool(
        "aaaaaaaaaaaaaaaaaaaaaaaa",
        "Bohrmaschine",
        Some(ToolCondition::NeedsRepair),
    )];
    let assignments = vec![assignment(
        "e1aaaaaaaaaaaaaaaaaaaaaa",
        "aaaaaaaaaaaaaaaaaaaaaaaa",
        None,
        None,
    )];

    let avail = availability::classify(&tools, &assignments);
    assert_eq!(avail.assigned, 1);
    assert_eq!(avail.defective, 1);
    assert_eq!(avail.available, 0);
}

#[test]
fn open_tool_ids_ignores_closed_assignments() {
    let assignments = vec![
        assignment("e1aaaaaaaaaaaaaaaaaaaaaa", "aaaaaaaaaaaaaaaaaaaaaaaa", None, None),
        assignment("e2aaaaaaaaaaaaaaaaaaaaaa", "bbbbbbbbbbbbbbbbbbbbbbbb", None, Some("2026-08-01")),
    ];
    let open = availability::open_tool_ids(&assignments);
    assert!(open.contains("aaaaaaaaaaaaaaaaaaaaaaaa"));
    assert!(!open.contains("bbbbbbbbbbbbbbbbbbbbbbbb"));
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

#[test]
fn condition_distribution_sums_to_one_hundred_percent() {
    let tools = vec![
        tool("aaaaaaaaaaaaaaaaaaaaaaaa", "A", Some(ToolCondition::Good)),
        tool("bbbbbbbbbbbbbbbbbbbbbbbb", "B", Some(ToolCondition::Good)),
        tool("cccccccccccccccccccccccc", "C", Some(ToolCondition::Defective)),
        tool("dddddddddddddddddddddddd", "D", None),
    ];

    let dist = distribution::by_condition(&tools);
    let total: f64 = dist.iter().map(|e| e.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);

    // descending by count, unknown bucket present
    assert_eq!(dist[0].label, "Gut");
    assert_eq!(dist[0].count, 2);
    assert!(dist.iter().any(|e| e.label == "Unbekannt" && e.count == 1));
}

#[test]
fn category_distribution_of_empty_collection_is_empty() {
    assert!(distribution::by_category(&[]).is_empty());
}

#[test]
fn category_distribution_uses_display_labels() {
    let mut a = tool("aaaaaaaaaaaaaaaaaaaaaaaa", "A", None);
    a.fields.category = Some(ToolCategory::PowerTools);
    let b = tool("bbbbbbbbbbbbbbbbbbbbbbbb", "B", None);

    let dist = distribution::by_category(&[a, b]);
    assert_eq!(dist.len(), 2);
    assert!(dist.iter().any(|e| e.label == "Elektrowerkzeuge"));
    assert!(dist.iter().any(|e| e.label == "Unbekannt"));
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn tool_list_sorts_worst_condition_first_then_name() {
    let tools = vec![
        tool("aaaaaaaaaaaaaaaaaaaaaaaa", "Zange", Some(ToolCondition::New)),
        tool("bbbbbbbbbbbbbbbbbbbbbbbb", "bohrmaschine", Some(ToolCondition::Defective)),
        tool("cccccccccccccccccccccccc", "Akkuschrauber", Some(ToolCondition::Defective)),
        tool("dddddddddddddddddddddddd", "Leiter", None),
    ];

    let listed = views::tool_list(&tools, &views::ToolFilter::default());
    let names: Vec<&str> = listed.iter().map(|t| t.display_name()).collect();
    // defective pair sorted case-insensitively, unknown condition last
    assert_eq!(names, vec!["Akkuschrauber", "bohrmaschine", "Zange", "Leiter"]);
}

#[test]
fn tool_filter_query_matches_any_field_case_insensitively() {
    let mut a = tool("aaaaaaaaaaaaaaaaaaaaaaaa", "Bohrmaschine", None);
    a.fields.manufacturer = Some("Bosch".to_string());
    let mut b = tool("bbbbbbbbbbbbbbbbbbbbbbbb", "Multimeter", None);
    b.fields.serial_number = Some("SN-4711".to_string());
    let tools = vec![a, b];

    let by_maker = views::ToolFilter {
        q: Some("bosch".to_string()),
        ..Default::default()
    };
    assert_eq!(views::tool_list(&tools, &by_maker).len(), 1);

    let by_serial = views::ToolFilter {
        q: Some("sn-47".to_string()),
        ..Default::default()
    };
    let found = views::tool_list(&tools, &by_serial);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].display_name(), "Multimeter");

    let nothing = views::ToolFilter {
        q: Some("fräse".to_string()),
        ..Default::default()
    };
    assert!(views::tool_list(&tools, &nothing).is_empty());
}

#[test]
fn tool_filter_criteria_compose_with_and() {
    let mut a = tool("aaaaaaaaaaaaaaaaaaaaaaaa", "Bohrmaschine", Some(ToolCondition::Good));
    a.fields.category = Some(ToolCategory::PowerTools);
    let mut b = tool("bbbbbbbbbbbbbbbbbbbbbbbb", "Bohrhammer", Some(ToolCondition::Defective));
    b.fields.category = Some(ToolCategory::PowerTools);
    let tools = vec![a, b];

    let filter = views::ToolFilter {
        q: Some("bohr".to_string()),
        category: Some(ToolCategory::PowerTools),
        condition: Some(ToolCondition::Good),
    };
    let found = views::tool_list(&tools, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].display_name(), "Bohrmaschine");
}

#[test]
fn active_assignments_sort_overdue_first() {
    let today = day(2026, 8, 30);
    let assignments = vec![
        assignment("e1aaaaaaaaaaaaaaaaaaaaaa", "aaaaaaaaaaaaaaaaaaaaaaaa", Some("2026-09-10"), None),
        assignment("e2aaaaaaaaaaaaaaaaaaaaaa", "bbbbbbbbbbbbbbbbbbbbbbbb", Some("2026-08-20"), None),
        // closed: excluded even though its date is past
        assignment("e3aaaaaaaaaaaaaaaaaaaaaa", "cccccccccccccccccccccccc", Some("2026-08-01"), Some("2026-08-02")),
        assignment("e4aaaaaaaaaaaaaaaaaaaaaa", "dddddddddddddddddddddddd", Some("2026-08-25"), None),
    ];

    let active = views::active_assignments(&assignments, today);
    let ids: Vec<&str> = active.iter().map(|a| a.record_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["e2aaaaaaaaaaaaaaaaaaaaaa", "e4aaaaaaaaaaaaaaaaaaaaaa", "e1aaaaaaaaaaaaaaaaaaaaaa"]
    );
}

#[test]
fn upcoming_maintenance_excludes_undated_entries_and_honors_limit() {
    let today = day(2026, 8, 30);
    let entries = vec![
        maintenance("f1aaaaaaaaaaaaaaaaaaaaaa", Some("2026-09-15"), None),
        maintenance("f2aaaaaaaaaaaaaaaaaaaaaa", None, None),
        maintenance("f3aaaaaaaaaaaaaaaaaaaaaa", Some("2026-08-10"), None),
        maintenance("f4aaaaaaaaaaaaaaaaaaaaaa", Some("kaputt"), None),
        maintenance("f5aaaaaaaaaaaaaaaaaaaaaa", Some("2026-09-01"), None),
    ];

    let upcoming = views::upcoming_maintenance(&entries, today, 2);
    let ids: Vec<&str> = upcoming.iter().map(|e| e.record_id.as_str()).collect();
    // overdue entry first, then soonest; undated and unparseable dropped
    assert_eq!(ids, vec!["f3aaaaaaaaaaaaaaaaaaaaaa", "f5aaaaaaaaaaaaaaaaaaaaaa"]);
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn dates_render_in_german_day_format() {
    assert_eq!(format::day("2026-08-30"), "30.08.2026");
    assert_eq!(format::day("2026-08-30T14:00:00"), "30.08.2026");
    // unparseable input is echoed back
    assert_eq!(format::day("demnächst"), "demnächst");
}

#[test]
fn amounts_render_as_euros() {
    assert_eq!(format::euros(1234.5), "1234.50 €");
    assert_eq!(format::euros(0.0), "0.00 €");
}

// ---------------------------------------------------------------------------
// Display names
// ---------------------------------------------------------------------------

#[test]
fn display_names_fall_back_to_placeholders() {
    let unnamed = Tool {
        record_id: "aaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: ToolFields::default(),
    };
    assert_eq!(unnamed.display_name(), "Unbenannt");

    let employee = Employee {
        record_id: "bbbbbbbbbbbbbbbbbbbbbbbb".to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: EmployeeFields {
            first_name: Some("Erika".to_string()),
            last_name: Some("Mustermann".to_string()),
            ..Default::default()
        },
    };
    assert_eq!(employee.display_name(), "Erika Mustermann");

    let last_only = Employee {
        fields: EmployeeFields {
            last_name: Some("Mustermann".to_string()),
            ..Default::default()
        },
        ..employee.clone()
    };
    assert_eq!(last_only.display_name(), "Mustermann");

    let project = Project {
        record_id: "cccccccccccccccccccccccc".to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: ProjectFields {
            project_number: Some("P-2026-017".to_string()),
            ..Default::default()
        },
    };
    assert_eq!(project.display_name(), "P-2026-017");
}

// ---------------------------------------------------------------------------
// Dashboard summary
// ---------------------------------------------------------------------------

fn sample_snapshot() -> Snapshot {
    let mut drill = tool("aaaaaaaaaaaaaaaaaaaaaaaa", "Bohrmaschine", Some(ToolCondition::Good));
    drill.fields.category = Some(ToolCategory::PowerTools);
    let meter = tool("bbbbbbbbbbbbbbbbbbbbbbbb", "Multimeter", Some(ToolCondition::Defective));
    let ladder = tool("cccccccccccccccccccccccc", "Leiter", Some(ToolCondition::New));

    let employee = Employee {
        record_id: "11aaaaaaaaaaaaaaaaaaaaaa".to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: EmployeeFields {
            first_name: Some("Max".to_string()),
            last_name: Some("Muster".to_string()),
            ..Default::default()
        },
    };
    let project = Project {
        record_id: "22aaaaaaaaaaaaaaaaaaaaaa".to_string(),
        created_at: "2026-01-01T08:00:00".to_string(),
        updated_at: None,
        fields: ProjectFields {
            name: Some("Neubau Halle 3".to_string()),
            ..Default::default()
        },
    };

    // overdue open assignment for the drill, linked to employee and project
    let mut open = assignment(
        "e1aaaaaaaaaaaaaaaaaaaaaa",
        "aaaaaaaaaaaaaaaaaaaaaaaa",
        Some("2026-08-20"),
        None,
    );
    open.fields.employee = Some(record_url(BASE, "696f8c7b968ea65b5fb99bc6", "11aaaaaaaaaaaaaaaaaaaaaa"));
    open.fields.project = Some(record_url(BASE, "696f8c7cbb8d1cc8e4f308cb", "22aaaaaaaaaaaaaaaaaaaaaa"));

    let closed = assignment(
        "e2aaaaaaaaaaaaaaaaaaaaaa",
        "cccccccccccccccccccccccc",
        Some("2026-08-01"),
        Some("2026-08-01"),
    );

    let mut overdue_service = maintenance("f1aaaaaaaaaaaaaaaaaaaaaa", Some("2026-08-15"), Some(120.0));
    overdue_service.fields.tool = Some(record_url(BASE, TOOLS_APP, "bbbbbbbbbbbbbbbbbbbbbbbb"));
    overdue_service.fields.maintenance_type = Some(MaintenanceType::Repair);
    overdue_service.fields.performed_on = Some("2026-08-10".to_string());

    let mut far_out = maintenance("f2aaaaaaaaaaaaaaaaaaaaaa", Some("2026-11-01"), Some(80.0));
    far_out.fields.performed_on = Some("2026-06-01".to_string());

    Snapshot {
        tools: vec![drill, meter, ladder],
        employees: vec![employee],
        projects: vec![project],
        assignments: vec![open, closed],
        maintenance: vec![overdue_service, far_out],
    }
}

#[test]
fn summarize_computes_kpis_and_attention() {
    let today = day(2026, 8, 30);
    let summary = engine::summarize(&sample_snapshot(), today);

    assert_eq!(summary.tools.total, 3);
    assert_eq!(summary.tools.assigned, 1);
    assert_eq!(summary.tools.defective, 1);
    assert_eq!(summary.tools.available, 1);

    assert_eq!(summary.assignments.active, 1);
    assert_eq!(summary.assignments.overdue, 1);

    assert_eq!(summary.maintenance.total, 2);
    assert_eq!(summary.maintenance.overdue, 1);
    // the overdue entry counts as due-soon too; November is outside
    assert_eq!(summary.maintenance.due_soon, 1);

    // 1 defective + 1 overdue maintenance + 1 overdue assignment
    assert_eq!(summary.attention, 3);
    assert_eq!(summary.employee_count, 1);
    assert_eq!(summary.project_count, 1);
}

#[test]
fn summarize_resolves_preview_references() {
    let today = day(2026, 8, 30);
    let summary = engine::summarize(&sample_snapshot(), today);

    assert_eq!(summary.active_assignments.len(), 1);
    let row = &summary.active_assignments[0];
    assert_eq!(row.tool_name.as_deref(), Some("Bohrmaschine"));
    assert_eq!(row.employee_name.as_deref(), Some("Max Muster"));
    assert_eq!(row.project_name.as_deref(), Some("Neubau Halle 3"));
    assert_eq!(row.planned_return_display.as_deref(), Some("20.08.2026"));
    assert!(row.overdue);

    assert_eq!(summary.upcoming_maintenance.len(), 2);
    let first = &summary.upcoming_maintenance[0];
    assert_eq!(first.tool_name.as_deref(), Some("Multimeter"));
    assert_eq!(first.maintenance_type, "Reparatur");
    assert_eq!(first.next_due_display, "15.08.2026");
    assert_eq!(first.days_remaining, -15);
    assert!(first.overdue);
}

#[test]
fn summarize_sums_trailing_costs() {
    let today = day(2026, 8, 30);
    let summary = engine::summarize(&sample_snapshot(), today);

    // only the 2026-08-10 entry falls in the trailing 30 days
    assert!((summary.maintenance.costs_last_30_days - 120.0).abs() < 1e-9);
    assert_eq!(summary.maintenance.costs_display, "120.00 €");
}

#[test]
fn trailing_cost_boundary_is_strict() {
    let since = day(2026, 7, 31);
    let on_boundary = vec![maintenance_with_performed("2026-07-31", 50.0)];
    assert_eq!(engine::maintenance_costs_since(&on_boundary, since), 0.0);

    let after = vec![maintenance_with_performed("2026-08-01", 50.0)];
    assert_eq!(engine::maintenance_costs_since(&after, since), 50.0);
}

fn maintenance_with_performed(performed_on: &str, cost: f64) -> MaintenanceEntry {
    let mut entry = maintenance("f9aaaaaaaaaaaaaaaaaaaaaa", None, Some(cost));
    entry.fields.performed_on = Some(performed_on.to_string());
    entry
}

#[test]
fn summarize_of_empty_snapshot_is_all_zeroes() {
    let summary = engine::summarize(&Snapshot::default(), day(2026, 8, 30));
    assert_eq!(summary.tools.total, 0);
    assert_eq!(summary.attention, 0);
    assert!(summary.tools_by_condition.is_empty());
    assert!(summary.tools_by_category.is_empty());
    assert!(summary.active_assignments.is_empty());
    assert!(summary.upcoming_maintenance.is_empty());
}
