//! Employee model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::Department;
use super::record::Record;

/// An employee record
pub type Employee = Record<EmployeeFields>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmployeeFields {
    #[serde(rename = "vorname", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "nachname", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "personalnummer", skip_serializing_if = "Option::is_none")]
    pub personnel_number: Option<String>,
    #[serde(rename = "abteilung", skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(rename = "telefonnummer", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Employee {
    /// "First Last" display name from whatever name parts are present
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [
            self.fields.first_name.as_deref(),
            self.fields.last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if parts.is_empty() {
            "Unbekannt".to_string()
        } else {
            parts.join(" ")
        }
    }
}
