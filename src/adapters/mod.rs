//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `mongo` - Historical fire points in MongoDB
//! - `arcgis` - Live incidents from an ArcGIS FeatureServer layer
//! - `memory` - In-memory fire point store for tests and local runs
//! - `http` - Axum routes over the application handlers

pub mod arcgis;
pub mod http;
pub mod memory;
pub mod mongo;

pub use arcgis::ArcGisIncidentFeed;
pub use memory::InMemoryFirePointReader;
pub use mongo::MongoFirePointReader;
