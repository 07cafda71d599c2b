//! Tool model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{ToolCategory, ToolCondition};
use super::record::Record;

/// A physical tool record
pub type Tool = Record<ToolFields>;

/// Tool field map; every attribute is independently optional and absent
/// fields stay absent on writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ToolFields {
    #[serde(rename = "werkzeugname", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "kategorie", skip_serializing_if = "Option::is_none")]
    pub category: Option<ToolCategory>,
    #[serde(rename = "hersteller", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(rename = "modellnummer", skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(rename = "seriennummer", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Purchase date (YYYY-MM-DD or ISO timestamp)
    #[serde(rename = "kaufdatum", skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(rename = "kaufpreis", skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(rename = "zustand", skip_serializing_if = "Option::is_none")]
    pub condition: Option<ToolCondition>,
    #[serde(rename = "lagerort", skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
}

impl Tool {
    /// Display name, falling back to a placeholder for unnamed tools
    pub fn display_name(&self) -> &str {
        self.fields.name.as_deref().unwrap_or("Unbenannt")
    }

    /// Whether the tool's condition flags it for attention
    pub fn needs_attention(&self) -> bool {
        self.fields
            .condition
            .is_some_and(ToolCondition::needs_attention)
    }
}
