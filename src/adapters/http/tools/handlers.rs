//! HTTP handlers for tool endpoints.

use axum::extract::State;
use axum::Json;

use super::dto::{ListToolsResponse, RunToolRequest, RunToolResponse};
use crate::adapters::http::app::AppState;
use crate::adapters::http::error::ApiError;

/// List the tool catalog. Never touches a backend.
///
/// GET /tools, GET /mcp/tools
pub async fn list_tools(State(state): State<AppState>) -> Json<ListToolsResponse> {
    Json(ListToolsResponse {
        tools: state.executor.available_tools(),
    })
}

/// Run a tool by id.
///
/// POST /run {"toolId": "...", "args": {...}}
pub async fn run_tool(
    State(state): State<AppState>,
    Json(request): Json<RunToolRequest>,
) -> Result<Json<RunToolResponse>, ApiError> {
    let result = state.executor.execute(request.into()).await?;
    Ok(Json(RunToolResponse { result }))
}
