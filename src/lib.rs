//! FireAid - Wildfire data query service
//!
//! Answers questions about historical Alaska fire location points (MongoDB)
//! and live wildfire incidents (ArcGIS WFIGS feed), over plain HTTP endpoints
//! and a small tool-dispatch surface.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
