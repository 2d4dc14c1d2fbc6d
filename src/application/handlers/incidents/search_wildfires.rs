//! SearchWildfiresHandler - Query handler for live wildfire incidents.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::incident::{IncidentFeature, IncidentQuery};
use crate::ports::IncidentFeed;

/// Handler for searching the live incident feed.
pub struct SearchWildfiresHandler {
    feed: Arc<dyn IncidentFeed>,
}

impl SearchWildfiresHandler {
    pub fn new(feed: Arc<dyn IncidentFeed>) -> Self {
        Self { feed }
    }

    pub async fn handle(&self, query: IncidentQuery) -> Result<Vec<IncidentFeature>, DomainError> {
        let incidents = self.feed.search(&query).await?;
        tracing::info!(
            keyword = ?query.keyword,
            state = ?query.state,
            limit = %query.limit,
            returned = incidents.len(),
            "Wildfire search completed"
        );
        Ok(incidents)
    }
}
