//! HTTP handlers for incident endpoints.

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{WildfiresParams, WildfiresResponse};
use crate::adapters::http::app::AppState;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::params::{lenient_int, trimmed};
use crate::domain::incident::{IncidentFeature, IncidentQuery};

/// Live wildfire incidents with timestamps rendered as RFC 3339.
///
/// GET /wildfires?keyword=Park&state=CA&limit=10
pub async fn wildfires(
    State(state): State<AppState>,
    Query(params): Query<WildfiresParams>,
) -> Result<Json<WildfiresResponse>, ApiError> {
    let keyword = trimmed(params.keyword.as_deref());
    let region = trimmed(params.state.as_deref());

    let query = IncidentQuery::new(
        lenient_int(params.limit.as_deref()).unwrap_or(IncidentQuery::DEFAULT_LIMIT),
    )
    .with_keyword(keyword)
    .with_state(region.as_deref());

    let result = state
        .search_wildfires_handler()
        .handle(query)
        .await?
        .into_iter()
        .map(IncidentFeature::with_iso_timestamps)
        .collect();

    Ok(Json(WildfiresResponse { result }))
}
