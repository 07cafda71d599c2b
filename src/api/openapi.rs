//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assignments, dashboard, employees, health, maintenance, projects, tools};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ToolKeeper API",
        version = "1.0.0",
        description = "Tool management REST API over a hosted record store",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Dashboard
        dashboard::dashboard_summary,
        // Tools
        tools::list_tools,
        tools::get_tool,
        tools::create_tool,
        tools::update_tool,
        tools::delete_tool,
        // Employees
        employees::list_employees,
        employees::get_employee,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
        // Projects
        projects::list_projects,
        projects::get_project,
        projects::create_project,
        projects::update_project,
        projects::delete_project,
        // Assignments
        assignments::list_assignments,
        assignments::get_assignment,
        assignments::create_assignment,
        assignments::return_assignment,
        assignments::update_assignment,
        assignments::delete_assignment,
        // Maintenance
        maintenance::list_maintenance,
        maintenance::upcoming_maintenance,
        maintenance::get_maintenance,
        maintenance::create_maintenance,
        maintenance::update_maintenance,
        maintenance::delete_maintenance,
    ),
    components(
        schemas(
            // Tools
            crate::models::ToolFields,
            crate::models::ToolCategory,
            crate::models::ToolCondition,
            // Employees
            crate::models::EmployeeFields,
            crate::models::Department,
            // Projects
            crate::models::ProjectFields,
            // Assignments
            crate::models::AssignmentFields,
            crate::models::CreateAssignment,
            // Maintenance
            crate::models::MaintenanceFields,
            crate::models::MaintenanceType,
            // Dashboard
            crate::engine::DashboardSummary,
            crate::engine::ToolKpis,
            crate::engine::AssignmentKpis,
            crate::engine::MaintenanceKpis,
            crate::engine::ActiveAssignmentView,
            crate::engine::UpcomingMaintenanceView,
            crate::engine::distribution::DistributionEntry,
            // Health
            health::HealthResponse,
            // Common
            super::MutationResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Aggregated dashboard summary"),
        (name = "tools", description = "Tool inventory management"),
        (name = "employees", description = "Employee management"),
        (name = "projects", description = "Project management"),
        (name = "assignments", description = "Tool hand-out and return"),
        (name = "maintenance", description = "Maintenance log")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
