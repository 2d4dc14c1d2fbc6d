//! Axum router configuration for fire point endpoints.

use axum::{routing::get, Router};

use super::handlers::{count_by_year, mcp_count, mcp_search, search_fire_points};
use crate::adapters::http::app::AppState;

/// Create the fire point router.
///
/// # Routes
///
/// - `GET /search_fire_points` - Filtered search (year, prescribed, org, limit)
/// - `GET /count_by_year` - Count for a season (year required)
/// - `GET /mcp/search` - Search with tool-protocol defaults, wrapped in `results`
/// - `GET /mcp/count` - Count with the year defaulting to 2024
pub fn fire_point_routes() -> Router<AppState> {
    Router::new()
        .route("/search_fire_points", get(search_fire_points))
        .route("/count_by_year", get(count_by_year))
        .route("/mcp/search", get(mcp_search))
        .route("/mcp/count", get(mcp_count))
}
