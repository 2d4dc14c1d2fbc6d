//! Incident feed query handlers.

mod search_wildfires;

pub use search_wildfires::SearchWildfiresHandler;
