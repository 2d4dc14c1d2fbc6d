//! Data transfer objects for incident HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::incident::IncidentFeature;

/// Query parameters for `GET /wildfires`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WildfiresParams {
    pub keyword: Option<String>,
    pub state: Option<String>,
    pub limit: Option<String>,
}

/// Response for `GET /wildfires`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WildfiresResponse {
    pub result: Vec<IncidentFeature>,
}
