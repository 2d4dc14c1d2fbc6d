//! Filter parameters for fire point searches.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FirePoint;
use crate::domain::foundation::ResultLimit;

/// Prescribed-fire flag as recorded in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrescribedFlag {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl PrescribedFlag {
    /// Accepts exactly `"Y"` or `"N"`.
    ///
    /// Any other input, including lower case, is not an error: the caller gets
    /// `None` and no prescribed-fire filter is applied.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some("Y") => Some(Self::Yes),
            Some("N") => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }
}

impl fmt::Display for PrescribedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fire point search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirePointQuery {
    pub year: Option<i64>,
    pub prescribed: Option<PrescribedFlag>,
    pub org: Option<String>,
    pub limit: ResultLimit,
}

impl FirePointQuery {
    /// Limit used when the caller does not ask for one.
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Creates an unfiltered query; `limit` is clamped into `[1, 100]`.
    pub fn new(limit: i64) -> Self {
        Self {
            year: None,
            prescribed: None,
            org: None,
            limit: ResultLimit::for_fire_points(limit),
        }
    }

    pub fn with_year(mut self, year: Option<i64>) -> Self {
        self.year = year;
        self
    }

    /// Sets the prescribed-fire filter from raw input (see [`PrescribedFlag::parse`]).
    pub fn with_prescribed(mut self, raw: Option<&str>) -> Self {
        self.prescribed = PrescribedFlag::parse(raw);
        self
    }

    /// Sets the managing organization filter. Empty strings count as absent.
    pub fn with_org(mut self, org: Option<String>) -> Self {
        self.org = org.filter(|o| !o.is_empty());
        self
    }

    /// Evaluates the filter against a single point, without the limit.
    pub fn matches(&self, point: &FirePoint) -> bool {
        if let Some(year) = self.year {
            let season_matches = point
                .fire_season
                .as_ref()
                .is_some_and(|season| season.matches_year(year));
            if !season_matches {
                return false;
            }
        }
        if let Some(flag) = self.prescribed {
            if point.prescribed_fire.as_deref() != Some(flag.as_str()) {
                return false;
            }
        }
        if let Some(ref org) = self.org {
            if point.mgmt_org_id.as_ref() != Some(org) {
                return false;
            }
        }
        true
    }
}

impl Default for FirePointQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}
