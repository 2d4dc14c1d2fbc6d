//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read; nothing writes to a backend.

pub mod handlers;

pub use handlers::{
    CountByYearHandler, CountByYearQuery, FireToolExecutor, SearchFirePointsHandler,
    SearchWildfiresHandler,
};
