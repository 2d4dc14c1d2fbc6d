//! Axum router configuration for incident endpoints.

use axum::{routing::get, Router};

use super::handlers::wildfires;
use crate::adapters::http::app::AppState;

/// - `GET /wildfires` - Live incidents (keyword, state, limit)
pub fn incident_routes() -> Router<AppState> {
    Router::new().route("/wildfires", get(wildfires))
}
