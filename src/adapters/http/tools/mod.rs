//! Tools HTTP adapter - catalog listing and tool dispatch.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::tool_routes;
