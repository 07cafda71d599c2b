//! Tool-to-employee assignment model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::Record;

/// A checkout assignment record. An assignment is open (the tool is out)
/// until `returned_on` is set; setting it closes the assignment for good.
pub type Assignment = Record<AssignmentFields>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AssignmentFields {
    /// Locator URL of the assigned tool
    #[serde(rename = "werkzeug", skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Locator URL of the borrowing employee
    #[serde(rename = "mitarbeiter", skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    /// Locator URL of the project the tool is used on (optional)
    #[serde(rename = "projekt", skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Assignment date (YYYY-MM-DD or ISO timestamp)
    #[serde(rename = "zuweisungsdatum", skip_serializing_if = "Option::is_none")]
    pub assigned_on: Option<String>,
    /// Planned return date
    #[serde(rename = "geplante_rueckgabe", skip_serializing_if = "Option::is_none")]
    pub planned_return: Option<String>,
    /// Actual return date; presence means the assignment is closed
    #[serde(rename = "tatsaechliche_rueckgabe", skip_serializing_if = "Option::is_none")]
    pub returned_on: Option<String>,
    #[serde(rename = "notizen", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Assignment {
    /// Whether the assignment is still open (tool not yet returned)
    pub fn is_open(&self) -> bool {
        self.fields.returned_on.is_none()
    }
}

/// Create assignment request: plain record identifiers, turned into
/// locator URLs when the record is written to the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAssignment {
    pub tool_id: String,
    pub employee_id: String,
    pub project_id: Option<String>,
    /// Defaults to today
    pub assigned_on: Option<String>,
    /// Defaults to one week from today
    pub planned_return: Option<String>,
    pub notes: Option<String>,
}
