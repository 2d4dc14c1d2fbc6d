//! HTTP adapter for the historical fire point endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::fire_point_routes;
