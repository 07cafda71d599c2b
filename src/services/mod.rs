//! Business logic services

pub mod assignments;
pub mod dashboard;
pub mod employees;
pub mod maintenance;
pub mod projects;
pub mod tools;

use crate::config::AppIds;
use crate::store::RecordStoreClient;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub tools: tools::ToolsService,
    pub employees: employees::EmployeesService,
    pub projects: projects::ProjectsService,
    pub assignments: assignments::AssignmentsService,
    pub maintenance: maintenance::MaintenanceService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services over a shared store client
    pub fn new(store: RecordStoreClient, apps: AppIds) -> Self {
        Self {
            tools: tools::ToolsService::new(store.clone(), apps.clone()),
            employees: employees::EmployeesService::new(store.clone(), apps.clone()),
            projects: projects::ProjectsService::new(store.clone(), apps.clone()),
            assignments: assignments::AssignmentsService::new(store.clone(), apps.clone()),
            maintenance: maintenance::MaintenanceService::new(store.clone(), apps.clone()),
            dashboard: dashboard::DashboardService::new(store, apps),
        }
    }
}
