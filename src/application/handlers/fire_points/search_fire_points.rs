//! SearchFirePointsHandler - Query handler for historical fire location points.

use std::sync::Arc;

use crate::domain::fire_point::{FirePoint, FirePointQuery};
use crate::domain::foundation::DomainError;
use crate::ports::FirePointReader;

/// Handler for searching fire points.
///
/// Filters are already normalized by [`FirePointQuery`]; the handler only
/// delegates to the reader and records the outcome.
pub struct SearchFirePointsHandler {
    reader: Arc<dyn FirePointReader>,
}

impl SearchFirePointsHandler {
    pub fn new(reader: Arc<dyn FirePointReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: FirePointQuery) -> Result<Vec<FirePoint>, DomainError> {
        let points = self.reader.search(&query).await?;
        tracing::info!(
            year = ?query.year,
            prescribed = ?query.prescribed,
            org = ?query.org,
            limit = %query.limit,
            returned = points.len(),
            "Fire point search completed"
        );
        Ok(points)
    }
}
