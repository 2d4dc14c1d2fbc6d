//! Filter parameters for live incident searches.

use crate::domain::foundation::ResultLimit;

/// Region prefix the feed uses for point-of-origin states (`US-CA`).
pub const STATE_REGION_PREFIX: &str = "US-";

/// Normalizes a point-of-origin state for the feed.
///
/// Trims and upper-cases the input. A bare two-character code gains the region
/// prefix (`"ca"` becomes `"US-CA"`); anything else passes through, so an
/// already-prefixed value is left as it is.
pub fn normalize_state(raw: &str) -> String {
    let state = raw.trim().to_uppercase();
    if state.chars().count() == 2 {
        format!("{}{}", STATE_REGION_PREFIX, state)
    } else {
        state
    }
}

/// A live incident search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentQuery {
    /// Case-sensitive substring of the incident name.
    pub keyword: Option<String>,
    /// Normalized point-of-origin state.
    pub state: Option<String>,
    pub limit: ResultLimit,
}

impl IncidentQuery {
    /// Limit used when the caller does not ask for one.
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Creates an unfiltered query; `limit` is clamped into `[1, 50]`.
    pub fn new(limit: i64) -> Self {
        Self {
            keyword: None,
            state: None,
            limit: ResultLimit::for_incidents(limit),
        }
    }

    /// Sets the keyword filter. Empty strings count as absent.
    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword.filter(|k| !k.is_empty());
        self
    }

    /// Sets the state filter, normalizing it. Blank input counts as absent.
    pub fn with_state(mut self, state: Option<&str>) -> Self {
        self.state = state
            .filter(|s| !s.trim().is_empty())
            .map(normalize_state);
        self
    }
}

impl Default for IncidentQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}
