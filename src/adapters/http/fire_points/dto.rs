//! Data transfer objects for fire point HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::fire_point::FirePoint;

/// Query parameters for `GET /search_fire_points`.
///
/// Values are read as text and coerced leniently.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFirePointsParams {
    pub year: Option<String>,
    pub prescribed: Option<String>,
    pub org: Option<String>,
    pub limit: Option<String>,
}

/// Query parameters for `GET /count_by_year` and `GET /mcp/count`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountByYearParams {
    pub year: Option<String>,
}

/// Query parameters for `GET /mcp/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McpSearchParams {
    pub year: Option<String>,
    pub prescribed: Option<String>,
    pub limit: Option<String>,
}

/// Response for `GET /mcp/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpSearchResponse {
    pub results: Vec<FirePoint>,
}
