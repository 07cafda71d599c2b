//! Maintenance log endpoints

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
    models::{MaintenanceEntry, MaintenanceFields},
};

use super::MutationResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UpcomingQuery {
    /// Maximum number of entries returned
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    crate::engine::MAINTENANCE_PREVIEW
}

#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    responses(
        (status = 200, description = "Maintenance log")
    )
)]
pub async fn list_maintenance(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceEntry>>> {
    let entries = state.services.maintenance.list().await?;
    Ok(Json(entries))
}

/// Entries with a parseable follow-up date, overdue first, then soonest
#[utoipa::path(
    get,
    path = "/maintenance/upcoming",
    tag = "maintenance",
    params(UpcomingQuery),
    responses(
        (status = 200, description = "Upcoming maintenance entries")
    )
)]
pub async fn upcoming_maintenance(
    State(state): State<crate::AppState>,
    Query(query): Query<UpcomingQuery>,
) -> AppResult<Json<Vec<MaintenanceEntry>>> {
    let today = Utc::now().date_naive();
    let entries = state.services.maintenance.upcoming(today, query.limit).await?;
    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Maintenance entry"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MaintenanceEntry>> {
    let entry = state.services.maintenance.get(&id).await?;
    Ok(Json(entry))
}

#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = MaintenanceFields,
    responses(
        (status = 201, description = "Maintenance entry created", body = MutationResponse)
    )
)]
pub async fn create_maintenance(
    State(state): State<crate::AppState>,
    Json(fields): Json<MaintenanceFields>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    state.services.maintenance.create(&fields).await?;
    Ok((StatusCode::CREATED, Json(MutationResponse::new("created"))))
}

#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = String, Path, description = "Record identifier")),
    request_body = MaintenanceFields,
    responses(
        (status = 200, description = "Maintenance entry updated", body = MutationResponse)
    )
)]
pub async fn update_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(fields): Json<MaintenanceFields>,
) -> AppResult<Json<MutationResponse>> {
    state.services.maintenance.update(&id, &fields).await?;
    Ok(Json(MutationResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 204, description = "Maintenance entry deleted")
    )
)]
pub async fn delete_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.maintenance.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
