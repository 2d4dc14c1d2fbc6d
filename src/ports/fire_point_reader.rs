//! Fire Point Reader Port - Read access to historical fire location points.
//!
//! The store holds records written by an out-of-band bulk import. This port
//! never writes; implementations only translate a [`FirePointQuery`] into the
//! backend's own filter dialect.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//! use fireaid::ports::FirePointReader;
//!
//! struct MongoFirePointReader { /* ... */ }
//!
//! #[async_trait]
//! impl FirePointReader for MongoFirePointReader {
//!     async fn search(&self, query: &FirePointQuery) -> Result<Vec<FirePoint>, DomainError> {
//!         // find(filter).projection(..).limit(query.limit)
//!     }
//!     // ...
//! }
//! ```

use async_trait::async_trait;

use crate::domain::fire_point::{FirePoint, FirePointQuery};
use crate::domain::foundation::DomainError;

/// Port for querying historical fire points.
#[async_trait]
pub trait FirePointReader: Send + Sync {
    /// Returns at most `query.limit` points matching the query, in store order.
    ///
    /// # Errors
    ///
    /// - `BackendUnavailable` if the store cannot be reached within its timeout
    async fn search(&self, query: &FirePointQuery) -> Result<Vec<FirePoint>, DomainError>;

    /// Counts points whose fire season equals `year`, stored as either an
    /// integer or its decimal string.
    ///
    /// # Errors
    ///
    /// - `BackendUnavailable` if the store cannot be reached within its timeout
    async fn count_by_year(&self, year: i64) -> Result<u64, DomainError>;
}
