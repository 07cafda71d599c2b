//! Project endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Project, ProjectFields},
};

use super::MutationResponse;

#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Project list")
    )
)]
pub async fn list_projects(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.services.projects.list().await?;
    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Project record"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = state.services.projects.get(&id).await?;
    Ok(Json(project))
}

#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectFields,
    responses(
        (status = 201, description = "Project created", body = MutationResponse)
    )
)]
pub async fn create_project(
    State(state): State<crate::AppState>,
    Json(fields): Json<ProjectFields>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    state.services.projects.create(&fields).await?;
    Ok((StatusCode::CREATED, Json(MutationResponse::new("created"))))
}

#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Record identifier")),
    request_body = ProjectFields,
    responses(
        (status = 200, description = "Project updated", body = MutationResponse)
    )
)]
pub async fn update_project(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(fields): Json<ProjectFields>,
) -> AppResult<Json<MutationResponse>> {
    state.services.projects.update(&id, &fields).await?;
    Ok(Json(MutationResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 204, description = "Project deleted")
    )
)]
pub async fn delete_project(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.projects.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
