//! Incident module - live wildfire incidents from the remote feed.

mod incident_feature;
mod query;

pub use incident_feature::{IncidentFeature, INCIDENT_OUT_FIELDS};
pub use query::{normalize_state, IncidentQuery, STATE_REGION_PREFIX};
