//! Maintenance entry model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::MaintenanceType;
use super::record::Record;

/// A maintenance log entry for a tool. The next-due date is a scheduling
/// hint only; it never changes the tool's condition by itself.
pub type MaintenanceEntry = Record<MaintenanceFields>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceFields {
    /// Locator URL of the maintained tool
    #[serde(rename = "werkzeug", skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    #[serde(rename = "wartungstyp", skip_serializing_if = "Option::is_none")]
    pub maintenance_type: Option<MaintenanceType>,
    /// Date the maintenance was performed (YYYY-MM-DD or ISO timestamp)
    #[serde(rename = "wartungsdatum", skip_serializing_if = "Option::is_none")]
    pub performed_on: Option<String>,
    #[serde(rename = "durchgefuehrt_von", skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<String>,
    #[serde(rename = "kosten", skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Next due date (YYYY-MM-DD or ISO timestamp)
    #[serde(rename = "naechste_wartung", skip_serializing_if = "Option::is_none")]
    pub next_due: Option<String>,
    #[serde(rename = "notizen_wartung", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
