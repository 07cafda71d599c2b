//! Tool endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    engine::views::ToolFilter,
    error::AppResult,
    models::{Tool, ToolFields},
};

use super::MutationResponse;

/// List tools, filtered and sorted (worst condition first, then name)
#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    params(ToolFilter),
    responses(
        (status = 200, description = "Tool list")
    )
)]
pub async fn list_tools(
    State(state): State<crate::AppState>,
    Query(filter): Query<ToolFilter>,
) -> AppResult<Json<Vec<Tool>>> {
    let tools = state.services.tools.list(&filter).await?;
    Ok(Json(tools))
}

/// Get a tool by record identifier
#[utoipa::path(
    get,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Tool record"),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn get_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tool>> {
    let tool = state.services.tools.get(&id).await?;
    Ok(Json(tool))
}

/// Create a tool
#[utoipa::path(
    post,
    path = "/tools",
    tag = "tools",
    request_body = ToolFields,
    responses(
        (status = 201, description = "Tool created", body = MutationResponse)
    )
)]
pub async fn create_tool(
    State(state): State<crate::AppState>,
    Json(fields): Json<ToolFields>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    state.services.tools.create(&fields).await?;
    Ok((StatusCode::CREATED, Json(MutationResponse::new("created"))))
}

/// Update a tool (partial field map; omitted fields are untouched)
#[utoipa::path(
    put,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Record identifier")),
    request_body = ToolFields,
    responses(
        (status = 200, description = "Tool updated", body = MutationResponse)
    )
)]
pub async fn update_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(fields): Json<ToolFields>,
) -> AppResult<Json<MutationResponse>> {
    state.services.tools.update(&id, &fields).await?;
    Ok(Json(MutationResponse::new("updated")))
}

/// Delete a tool
#[utoipa::path(
    delete,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 204, description = "Tool deleted")
    )
)]
pub async fn delete_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.tools.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
