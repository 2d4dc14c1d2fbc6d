//! HTTP adapters - REST API implementations.
//!
//! Each query surface has its own dto/handlers/routes module; `app` merges
//! them into one router over a shared [`AppState`].

pub mod app;
pub mod error;
pub mod fire_points;
pub mod incidents;
mod params;
pub mod tools;

pub use app::{app_router, AppState};
pub use error::{ApiError, ErrorResponse};
