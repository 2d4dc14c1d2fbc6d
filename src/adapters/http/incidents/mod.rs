//! HTTP adapter for the live incident endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::incident_routes;
