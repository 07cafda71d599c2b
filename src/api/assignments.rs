//! Assignment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{Assignment, AssignmentFields, CreateAssignment},
};

use super::MutationResponse;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AssignmentQuery {
    /// Only return assignments without a recorded return, overdue first
    #[serde(default)]
    pub active: bool,
}

#[utoipa::path(
    get,
    path = "/assignments",
    tag = "assignments",
    params(AssignmentQuery),
    responses(
        (status = 200, description = "Assignment list")
    )
)]
pub async fn list_assignments(
    State(state): State<crate::AppState>,
    Query(query): Query<AssignmentQuery>,
) -> AppResult<Json<Vec<Assignment>>> {
    let today = Utc::now().date_naive();
    let assignments = state.services.assignments.list(query.active, today).await?;
    Ok(Json(assignments))
}

#[utoipa::path(
    get,
    path = "/assignments/{id}",
    tag = "assignments",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Assignment record"),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn get_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Assignment>> {
    let assignment = state.services.assignments.get(&id).await?;
    Ok(Json(assignment))
}

/// Hand a tool out. Rejects tools that already have an open assignment
/// (409) or are in defective condition (422).
#[utoipa::path(
    post,
    path = "/assignments",
    tag = "assignments",
    request_body = CreateAssignment,
    responses(
        (status = 201, description = "Assignment created", body = MutationResponse),
        (status = 404, description = "Tool not found"),
        (status = 409, description = "Tool already assigned"),
        (status = 422, description = "Tool is defective")
    )
)]
pub async fn create_assignment(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    let today = Utc::now().date_naive();
    state.services.assignments.create(&request, today).await?;
    Ok((StatusCode::CREATED, Json(MutationResponse::new("created"))))
}

/// Record the return of a handed-out tool
#[utoipa::path(
    post,
    path = "/assignments/{id}/return",
    tag = "assignments",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Return recorded", body = MutationResponse),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Assignment already returned")
    )
)]
pub async fn return_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MutationResponse>> {
    let today = Utc::now().date_naive();
    state.services.assignments.return_assignment(&id, today).await?;
    Ok(Json(MutationResponse::new("returned")))
}

#[utoipa::path(
    put,
    path = "/assignments/{id}",
    tag = "assignments",
    params(("id" = String, Path, description = "Record identifier")),
    request_body = AssignmentFields,
    responses(
        (status = 200, description = "Assignment updated", body = MutationResponse)
    )
)]
pub async fn update_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(fields): Json<AssignmentFields>,
) -> AppResult<Json<MutationResponse>> {
    state.services.assignments.update(&id, &fields).await?;
    Ok(Json(MutationResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/assignments/{id}",
    tag = "assignments",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 204, description = "Assignment deleted")
    )
)]
pub async fn delete_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.assignments.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
