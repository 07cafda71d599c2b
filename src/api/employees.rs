//! Employee endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Employee, EmployeeFields},
};

use super::MutationResponse;

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Employee list")
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list().await?;
    Ok(Json(employees))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Employee record"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get(&id).await?;
    Ok(Json(employee))
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = EmployeeFields,
    responses(
        (status = 201, description = "Employee created", body = MutationResponse)
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    Json(fields): Json<EmployeeFields>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    state.services.employees.create(&fields).await?;
    Ok((StatusCode::CREATED, Json(MutationResponse::new("created"))))
}

#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "Record identifier")),
    request_body = EmployeeFields,
    responses(
        (status = 200, description = "Employee updated", body = MutationResponse)
    )
)]
pub async fn update_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(fields): Json<EmployeeFields>,
) -> AppResult<Json<MutationResponse>> {
    state.services.employees.update(&id, &fields).await?;
    Ok(Json(MutationResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 204, description = "Employee deleted")
    )
)]
pub async fn delete_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.employees.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
