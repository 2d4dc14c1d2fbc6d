//! Domain layer containing query types and business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (loose scalars, result limits, errors)
//! - `fire_point` - Historical fire location points and their filters
//! - `incident` - Live wildfire incidents and state normalization
//! - `tools` - Tool catalog and invocations for the dispatch façade

pub mod fire_point;
pub mod foundation;
pub mod incident;
pub mod tools;
