//! Shared domain enums (wire labels owned by the remote record store)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ToolCategory
// ---------------------------------------------------------------------------

/// Tool category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ToolCategory {
    #[serde(rename = "handwerkzeuge")]
    HandTools,
    #[serde(rename = "elektrowerkzeuge")]
    PowerTools,
    #[serde(rename = "messgeraete")]
    MeasuringDevices,
    #[serde(rename = "pruefgeraete")]
    TestingDevices,
    #[serde(rename = "leitern_gerueste")]
    LaddersScaffolding,
    #[serde(rename = "kabel_leitungen")]
    CablesLines,
    #[serde(rename = "sonstiges")]
    Miscellaneous,
    /// Fallback for labels the store knows but this build does not
    #[serde(other, rename = "unbekannt")]
    Unknown,
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ToolCategory::HandTools => "Handwerkzeuge",
            ToolCategory::PowerTools => "Elektrowerkzeuge",
            ToolCategory::MeasuringDevices => "Messgeräte",
            ToolCategory::TestingDevices => "Prüfgeräte",
            ToolCategory::LaddersScaffolding => "Leitern und Gerüste",
            ToolCategory::CablesLines => "Kabel und Leitungen",
            ToolCategory::Miscellaneous => "Sonstiges",
            ToolCategory::Unknown => "Unbekannt",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ToolCondition
// ---------------------------------------------------------------------------

/// Tool condition, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ToolCondition {
    #[serde(rename = "defekt")]
    Defective,
    #[serde(rename = "reparaturbeduerftig")]
    NeedsRepair,
    #[serde(rename = "befriedigend")]
    Adequate,
    #[serde(rename = "gut")]
    Good,
    #[serde(rename = "sehr_gut")]
    VeryGood,
    #[serde(rename = "neu")]
    New,
    #[serde(other, rename = "unbekannt")]
    Unknown,
}

impl ToolCondition {
    /// Severity rank for sorting: 0 = worst (defective), unknown sorts last
    pub fn severity(self) -> u8 {
        match self {
            ToolCondition::Defective => 0,
            ToolCondition::NeedsRepair => 1,
            ToolCondition::Adequate => 2,
            ToolCondition::Good => 3,
            ToolCondition::VeryGood => 4,
            ToolCondition::New => 5,
            ToolCondition::Unknown => 6,
        }
    }

    /// Whether the condition flags the tool for immediate attention
    pub fn needs_attention(self) -> bool {
        matches!(self, ToolCondition::Defective | ToolCondition::NeedsRepair)
    }
}

impl std::fmt::Display for ToolCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ToolCondition::Defective => "Defekt",
            ToolCondition::NeedsRepair => "Reparaturbedürftig",
            ToolCondition::Adequate => "Befriedigend",
            ToolCondition::Good => "Gut",
            ToolCondition::VeryGood => "Sehr gut",
            ToolCondition::New => "Neu",
            ToolCondition::Unknown => "Unbekannt",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// Employee department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Department {
    #[serde(rename = "elektroinstallation")]
    ElectricalInstallation,
    #[serde(rename = "wartung_service")]
    MaintenanceService,
    #[serde(rename = "planung")]
    Planning,
    #[serde(rename = "verwaltung")]
    Administration,
    #[serde(rename = "lager")]
    Warehouse,
    #[serde(other, rename = "unbekannt")]
    Unknown,
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Department::ElectricalInstallation => "Elektroinstallation",
            Department::MaintenanceService => "Wartung und Service",
            Department::Planning => "Planung",
            Department::Administration => "Verwaltung",
            Department::Warehouse => "Lager",
            Department::Unknown => "Unbekannt",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Maintenance entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MaintenanceType {
    #[serde(rename = "inspektion")]
    Inspection,
    #[serde(rename = "reparatur")]
    Repair,
    #[serde(rename = "kalibrierung")]
    Calibration,
    #[serde(rename = "reinigung")]
    Cleaning,
    #[serde(rename = "pruefung_dguv_v3")]
    StatutorySafetyCheck,
    #[serde(rename = "sonstiges")]
    Miscellaneous,
    #[serde(other, rename = "unbekannt")]
    Unknown,
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceType::Inspection => "Inspektion",
            MaintenanceType::Repair => "Reparatur",
            MaintenanceType::Calibration => "Kalibrierung",
            MaintenanceType::Cleaning => "Reinigung",
            MaintenanceType::StatutorySafetyCheck => "Prüfung nach DGUV V3",
            MaintenanceType::Miscellaneous => "Sonstiges",
            MaintenanceType::Unknown => "Unbekannt",
        };
        write!(f, "{}", label)
    }
}
