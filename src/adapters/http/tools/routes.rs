//! Axum router configuration for tool endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_tools, run_tool};
use crate::adapters::http::app::AppState;

/// Create the tools router.
///
/// # Routes
///
/// - `GET /tools` - Tool catalog
/// - `GET /mcp/tools` - Same catalog under the tool-protocol prefix
/// - `POST /run` - Dispatch a tool invocation
pub fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/mcp/tools", get(list_tools))
        .route("/run", post(run_tool))
}
