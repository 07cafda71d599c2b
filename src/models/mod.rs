//! Data models for ToolKeeper

pub mod assignment;
pub mod employee;
pub mod enums;
pub mod maintenance;
pub mod project;
pub mod record;
pub mod reference;
pub mod tool;

// Re-export commonly used types
pub use assignment::{Assignment, AssignmentFields, CreateAssignment};
pub use employee::{Employee, EmployeeFields};
pub use enums::{Department, MaintenanceType, ToolCategory, ToolCondition};
pub use maintenance::{MaintenanceEntry, MaintenanceFields};
pub use project::{Project, ProjectFields};
pub use record::Record;
pub use tool::{Tool, ToolFields};
