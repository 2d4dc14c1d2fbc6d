//! MongoDB implementation of FirePointReader.
//!
//! Reads the collection populated by the CSV bulk import. The client is built
//! once at startup and shared by every request; server selection carries a
//! short timeout so an unreachable store fails fast.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Document};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::{debug, warn};

use super::filters::{projection, search_filter, year_filter};
use crate::config::StoreConfig;
use crate::domain::fire_point::{FirePoint, FirePointQuery};
use crate::domain::foundation::DomainError;
use crate::ports::FirePointReader;

/// MongoDB implementation of the FirePointReader port.
#[derive(Clone)]
pub struct MongoFirePointReader {
    collection: Collection<Document>,
}

impl MongoFirePointReader {
    /// Creates a reader over an existing collection handle.
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Builds the client from configuration.
    ///
    /// No server round-trip happens here; the first query performs server
    /// selection and fails with `BackendUnavailable` if it times out.
    pub async fn connect(config: &StoreConfig) -> Result<Self, DomainError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(map_store_error)?;
        options.server_selection_timeout = Some(config.server_selection_timeout());
        options.connect_timeout = Some(config.server_selection_timeout());
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options).map_err(map_store_error)?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Ok(Self::new(collection))
    }
}

#[async_trait]
impl FirePointReader for MongoFirePointReader {
    async fn search(&self, query: &FirePointQuery) -> Result<Vec<FirePoint>, DomainError> {
        let filter = search_filter(query);
        debug!(filter = %filter, limit = %query.limit, "Querying fire points");

        let mut cursor = self
            .collection
            .find(filter)
            .projection(projection())
            .limit(query.limit.as_i64())
            .await
            .map_err(map_store_error)?;

        let mut points = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(map_store_error)? {
            points.push(decode_point(document)?);
        }

        Ok(points)
    }

    async fn count_by_year(&self, year: i64) -> Result<u64, DomainError> {
        let filter = year_filter(year);
        debug!(filter = %filter, "Counting fire points");

        self.collection
            .count_documents(filter)
            .await
            .map_err(map_store_error)
    }
}

fn decode_point(document: Document) -> Result<FirePoint, DomainError> {
    bson::from_document(document).map_err(|e| {
        DomainError::internal(format!("Malformed fire point record: {}", e))
    })
}

/// Connection-level failures mean the store is unavailable; anything else is
/// an internal failure of the query itself.
fn map_store_error(err: MongoError) -> DomainError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => {
            warn!(error = %err, "Document store unavailable");
            DomainError::backend_unavailable(format!("Document store unavailable: {}", err))
        }
        _ => {
            warn!(error = %err, "Document store query failed");
            DomainError::internal(format!("Document store query failed: {}", err))
        }
    }
}
