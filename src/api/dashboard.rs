//! Dashboard endpoint

use axum::{extract::State, Json};

use crate::{engine::DashboardSummary, error::AppResult};

/// Full dashboard summary over a single consistent snapshot of all
/// five collections.
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 502, description = "Record store unavailable")
    )
)]
pub async fn dashboard_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let summary = state.services.dashboard.summary().await?;
    Ok(Json(summary))
}
