//! Result limit value object (clamped into `[1, cap]`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of records a query may return.
///
/// Always within `[1, cap]`: the requested value is clamped before any backend
/// is queried, never truncated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultLimit(u32);

impl ResultLimit {
    /// Cap for queries against the local fire point store.
    pub const FIRE_POINTS_CAP: u32 = 100;

    /// Cap for queries against the remote incident feed.
    pub const INCIDENTS_CAP: u32 = 50;

    /// Creates a limit, clamping `requested` into `[1, cap]`.
    ///
    /// A `cap` of zero is treated as one.
    pub fn clamped(requested: i64, cap: u32) -> Self {
        let cap = i64::from(cap.max(1));
        Self(requested.clamp(1, cap) as u32)
    }

    /// Clamps against the fire point store cap.
    pub fn for_fire_points(requested: i64) -> Self {
        Self::clamped(requested, Self::FIRE_POINTS_CAP)
    }

    /// Clamps against the incident feed cap.
    pub fn for_incidents(requested: i64) -> Self {
        Self::clamped(requested, Self::INCIDENTS_CAP)
    }

    /// Returns the value as u32.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the value as i64, the width the document store expects.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for ResultLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
