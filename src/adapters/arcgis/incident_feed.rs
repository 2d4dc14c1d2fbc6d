//! ArcGIS IncidentFeed Adapter - live wildfire incidents from a FeatureServer layer.
//!
//! Queries the layer's `/query` endpoint with a SQL-like `where` clause and
//! reshapes each feature's attribute bag into an [`IncidentFeature`].
//!
//! # Configuration
//!
//! ```ignore
//! let feed = ArcGisIncidentFeed::new(config.feed.clone())?;
//! let incidents = feed.search(&IncidentQuery::default().with_state(Some("CA"))).await?;
//! ```
//!
//! Failures are never retried.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::dto::QueryResponse;
use super::where_clause::where_clause;
use crate::config::FeedConfig;
use crate::domain::foundation::DomainError;
use crate::domain::incident::{IncidentFeature, IncidentQuery, INCIDENT_OUT_FIELDS};
use crate::ports::IncidentFeed;

/// Incident feed backed by an ArcGIS FeatureServer layer.
#[derive(Debug, Clone)]
pub struct ArcGisIncidentFeed {
    client: Client,
    config: FeedConfig,
}

impl ArcGisIncidentFeed {
    /// Builds the HTTP client with the configured timeout and User-Agent.
    pub fn new(config: FeedConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// The layer's query endpoint.
    fn query_url(&self) -> String {
        format!("{}/query", self.config.layer_url.trim_end_matches('/'))
    }

    /// Query-string parameters for a search.
    fn query_params(&self, query: &IncidentQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("f", "json".to_string()),
            ("where", where_clause(query)),
            ("outFields", INCIDENT_OUT_FIELDS.join(",")),
            ("returnGeometry", "false".to_string()),
            ("resultRecordCount", query.limit.to_string()),
        ];

        if let Some(ordering) = self.config.ordering() {
            params.push(("orderByFields", ordering.to_string()));
        }

        params
    }

    fn map_transport_error(&self, e: reqwest::Error) -> DomainError {
        let message = if e.is_timeout() {
            format!(
                "Incident feed timed out after {}s",
                self.config.timeout_secs
            )
        } else if e.is_connect() {
            format!("Incident feed connection failed: {}", e)
        } else {
            format!("Incident feed request failed: {}", e)
        };
        DomainError::upstream_unavailable(message)
    }

    /// Turns the raw response into features, surfacing HTTP and in-band errors.
    async fn parse_response(&self, response: Response) -> Result<Vec<IncidentFeature>, DomainError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(
                DomainError::upstream(format!("Incident feed returned {}: {}", status, body))
                    .with_detail("status", status.as_u16().to_string()),
            );
        }

        let parsed: QueryResponse = serde_json::from_str(&body).map_err(|e| {
            DomainError::upstream_unavailable(format!("Invalid incident feed response: {}", e))
        })?;

        if let Some(error) = parsed.error {
            return Err(DomainError::upstream(format!("ArcGIS error: {}", error)));
        }

        Ok(parsed
            .features()
            .iter()
            .map(|f| IncidentFeature::from_attributes(&f.attributes()))
            .collect())
    }
}

#[async_trait]
impl IncidentFeed for ArcGisIncidentFeed {
    async fn search(&self, query: &IncidentQuery) -> Result<Vec<IncidentFeature>, DomainError> {
        let params = self.query_params(query);
        tracing::debug!(
            where_clause = %params[1].1,
            limit = %query.limit,
            "Querying incident feed"
        );

        let response = self
            .client
            .get(self.query_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        match self.parse_response(response).await {
            Ok(features) => {
                tracing::debug!(count = features.len(), "Incident feed returned features");
                Ok(features)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Incident feed query failed");
                Err(err)
            }
        }
    }
}
