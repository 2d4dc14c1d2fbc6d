//! In-Memory FirePointReader Adapter
//!
//! Holds fire points in memory and applies the same filter rules as the
//! document store. Useful for testing and development without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::fire_point::{FirePoint, FirePointQuery};
use crate::domain::foundation::DomainError;
use crate::ports::FirePointReader;

/// In-memory store of fire points, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFirePointReader {
    points: Arc<RwLock<Vec<FirePoint>>>,
}

impl InMemoryFirePointReader {
    /// Create a reader over the given points
    pub fn new(points: Vec<FirePoint>) -> Self {
        Self {
            points: Arc::new(RwLock::new(points)),
        }
    }

    /// Append a point (test setup only; the port itself never writes)
    pub async fn insert(&self, point: FirePoint) {
        self.points.write().await.push(point);
    }

    /// Get the number of stored points
    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.points.read().await.is_empty()
    }
}

#[async_trait]
impl FirePointReader for InMemoryFirePointReader {
    async fn search(&self, query: &FirePointQuery) -> Result<Vec<FirePoint>, DomainError> {
        let points = self.points.read().await;
        Ok(points
            .iter()
            .filter(|p| query.matches(p))
            .take(query.limit.value() as usize)
            .cloned()
            .collect())
    }

    async fn count_by_year(&self, year: i64) -> Result<u64, DomainError> {
        let query = FirePointQuery::default().with_year(Some(year));
        let points = self.points.read().await;
        Ok(points.iter().filter(|p| query.matches(p)).count() as u64)
    }
}
