//! ArcGIS FeatureServer adapter for the live incident feed.

mod dto;
mod incident_feed;
mod where_clause;

pub use incident_feed::ArcGisIncidentFeed;
pub use where_clause::{escape_literal, where_clause, MATCH_ALL};
