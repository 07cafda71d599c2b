//! Project model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::Record;

/// A customer project record
pub type Project = Record<ProjectFields>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProjectFields {
    #[serde(rename = "projektname", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "projektnummer", skip_serializing_if = "Option::is_none")]
    pub project_number: Option<String>,
    #[serde(rename = "kundenname", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(rename = "strasse", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "hausnummer", skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(rename = "postleitzahl", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "stadt", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Start date (YYYY-MM-DD or ISO timestamp)
    #[serde(rename = "startdatum", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD or ISO timestamp)
    #[serde(rename = "enddatum", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "projektleiter", skip_serializing_if = "Option::is_none")]
    pub project_lead: Option<String>,
}

impl Project {
    /// Display name: project name, falling back to the project number
    pub fn display_name(&self) -> &str {
        self.fields
            .name
            .as_deref()
            .or(self.fields.project_number.as_deref())
            .unwrap_or("Unbenannt")
    }
}
