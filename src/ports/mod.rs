//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `FirePointReader` - Historical fire points in the local document store
//! - `IncidentFeed` - Live incidents from the remote feature service
//!
//! ## Façade Ports
//!
//! - `ToolExecutor` - Run a registered tool by identifier with an argument bag

mod fire_point_reader;
mod incident_feed;
mod tool_executor;

pub use fire_point_reader::FirePointReader;
pub use incident_feed::IncidentFeed;
pub use tool_executor::{ToolExecutionError, ToolExecutor};
