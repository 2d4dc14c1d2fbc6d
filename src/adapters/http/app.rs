//! Router assembly and shared application state.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::fire_points::fire_point_routes;
use super::incidents::incident_routes;
use super::tools::tool_routes;
use crate::application::handlers::{
    CountByYearHandler, FireToolExecutor, SearchFirePointsHandler, SearchWildfiresHandler,
};
use crate::ports::{FirePointReader, IncidentFeed, ToolExecutor};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every handle is built once at startup and only read
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    pub fire_points: Arc<dyn FirePointReader>,
    pub incidents: Arc<dyn IncidentFeed>,
    pub executor: Arc<dyn ToolExecutor>,
}

impl AppState {
    /// Wires the default tool executor over the two read ports.
    pub fn new(fire_points: Arc<dyn FirePointReader>, incidents: Arc<dyn IncidentFeed>) -> Self {
        let executor = Arc::new(FireToolExecutor::new(fire_points.clone(), incidents.clone()));
        Self {
            fire_points,
            incidents,
            executor,
        }
    }

    pub fn search_fire_points_handler(&self) -> SearchFirePointsHandler {
        SearchFirePointsHandler::new(self.fire_points.clone())
    }

    pub fn count_by_year_handler(&self) -> CountByYearHandler {
        CountByYearHandler::new(self.fire_points.clone())
    }

    pub fn search_wildfires_handler(&self) -> SearchWildfiresHandler {
        SearchWildfiresHandler::new(self.incidents.clone())
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Builds the full router with tracing and a per-request timeout.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(fire_point_routes())
        .merge(incident_routes())
        .merge(tool_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
