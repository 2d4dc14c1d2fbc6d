//! CountByYearHandler - Query handler for per-season fire point counts.

use std::sync::Arc;

use crate::domain::fire_point::YearCount;
use crate::domain::foundation::DomainError;
use crate::ports::FirePointReader;

/// Query to count fire points in a fire season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountByYearQuery {
    pub year: i64,
}

impl CountByYearQuery {
    /// Season used when the caller does not name one.
    pub const DEFAULT_YEAR: i64 = 2024;

    pub fn new(year: i64) -> Self {
        Self { year }
    }
}

impl Default for CountByYearQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_YEAR)
    }
}

/// Handler for counting fire points by season.
pub struct CountByYearHandler {
    reader: Arc<dyn FirePointReader>,
}

impl CountByYearHandler {
    pub fn new(reader: Arc<dyn FirePointReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: CountByYearQuery) -> Result<YearCount, DomainError> {
        let count = self.reader.count_by_year(query.year).await?;
        tracing::info!(year = query.year, count, "Fire point count completed");
        Ok(YearCount::new(query.year, count))
    }
}
