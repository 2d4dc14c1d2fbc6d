//! Application handlers.
//!
//! Query handlers that orchestrate the read ports, plus the tool executor
//! that dispatches named tools onto them.

pub mod fire_points;
pub mod incidents;
pub mod tools;

pub use fire_points::{CountByYearHandler, CountByYearQuery, SearchFirePointsHandler};
pub use incidents::SearchWildfiresHandler;
pub use tools::FireToolExecutor;
