//! HTTP handlers for fire point endpoints.

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{CountByYearParams, McpSearchParams, McpSearchResponse, SearchFirePointsParams};
use crate::adapters::http::app::AppState;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::params::{lenient_int, trimmed};
use crate::application::handlers::fire_points::CountByYearQuery;
use crate::domain::fire_point::{FirePoint, FirePointQuery, PrescribedFlag, YearCount};

/// Limit used by `/mcp/search` when none is given.
const MCP_SEARCH_LIMIT: i64 = 10;

/// Search historical fire points.
///
/// GET /search_fire_points?year=2024&prescribed=Y&org=AKS&limit=20
pub async fn search_fire_points(
    State(state): State<AppState>,
    Query(params): Query<SearchFirePointsParams>,
) -> Result<Json<Vec<FirePoint>>, ApiError> {
    let query = FirePointQuery::new(
        lenient_int(params.limit.as_deref()).unwrap_or(FirePointQuery::DEFAULT_LIMIT),
    )
    .with_year(lenient_int(params.year.as_deref()))
    .with_prescribed(params.prescribed.as_deref())
    .with_org(trimmed(params.org.as_deref()));

    let points = state.search_fire_points_handler().handle(query).await?;
    Ok(Json(points))
}

/// Count fire points for a season. The year is required.
///
/// GET /count_by_year?year=2024
pub async fn count_by_year(
    State(state): State<AppState>,
    Query(params): Query<CountByYearParams>,
) -> Result<Json<YearCount>, ApiError> {
    let raw = trimmed(params.year.as_deref())
        .ok_or_else(|| ApiError::bad_request("year is required"))?;
    let year = lenient_int(Some(raw.as_str()))
        .ok_or_else(|| ApiError::bad_request(format!("year must be an integer, got '{}'", raw)))?;

    let count = state
        .count_by_year_handler()
        .handle(CountByYearQuery::new(year))
        .await?;
    Ok(Json(count))
}

/// Tool-protocol alias of the fire point search with protocol defaults.
///
/// GET /mcp/search?year=2024&prescribed=Y&limit=10
pub async fn mcp_search(
    State(state): State<AppState>,
    Query(params): Query<McpSearchParams>,
) -> Result<Json<McpSearchResponse>, ApiError> {
    let prescribed = params
        .prescribed
        .unwrap_or_else(|| PrescribedFlag::Yes.as_str().to_string());

    let query = FirePointQuery::new(lenient_int(params.limit.as_deref()).unwrap_or(MCP_SEARCH_LIMIT))
        .with_year(Some(
            lenient_int(params.year.as_deref()).unwrap_or(CountByYearQuery::DEFAULT_YEAR),
        ))
        .with_prescribed(Some(prescribed.as_str()));

    let results = state.search_fire_points_handler().handle(query).await?;
    Ok(Json(McpSearchResponse { results }))
}

/// Tool-protocol alias of the season count; the year defaults to 2024.
///
/// GET /mcp/count?year=2024
pub async fn mcp_count(
    State(state): State<AppState>,
    Query(params): Query<CountByYearParams>,
) -> Result<Json<YearCount>, ApiError> {
    let year = lenient_int(params.year.as_deref()).unwrap_or(CountByYearQuery::DEFAULT_YEAR);
    let count = state
        .count_by_year_handler()
        .handle(CountByYearQuery::new(year))
        .await?;
    Ok(Json(count))
}
