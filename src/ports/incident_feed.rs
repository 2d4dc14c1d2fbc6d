//! Incident Feed Port - Live wildfire incidents from a remote feature service.
//!
//! Every call goes to the remote authority; nothing is cached between calls.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::incident::{IncidentFeature, IncidentQuery};

/// Port for searching live incidents.
#[async_trait]
pub trait IncidentFeed: Send + Sync {
    /// Returns at most `query.limit` incidents matching the query.
    ///
    /// # Errors
    ///
    /// - `UpstreamError` if the feed answers with a non-success status or an
    ///   error payload
    /// - `UpstreamUnavailable` on network failure or timeout
    async fn search(&self, query: &IncidentQuery) -> Result<Vec<IncidentFeature>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_feed_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn IncidentFeed>();
    }
}
