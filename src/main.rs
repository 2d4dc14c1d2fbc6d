//! FireAid service entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use fireaid::adapters::arcgis::ArcGisIncidentFeed;
use fireaid::adapters::http::{app_router, AppState};
use fireaid::adapters::mongo::MongoFirePointReader;
use fireaid::config::AppConfig;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    tracing::info!(
        environment = ?config.server.environment,
        database = %config.store.database,
        collection = %config.store.collection,
        feed = %config.feed.layer_url,
        "Starting fireaid"
    );

    // Client construction only; the first query performs server selection.
    let fire_points = MongoFirePointReader::connect(&config.store).await?;
    let incidents = ArcGisIncidentFeed::new(config.feed.clone())?;

    let state = AppState::new(Arc::new(fire_points), Arc::new(incidents));
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
