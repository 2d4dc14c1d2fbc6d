//! Identifiers of the registered tools.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A registered tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    SearchFirePoints,
    CountByYear,
    SearchWildfires,
}

impl ToolId {
    /// All tools, in catalog order.
    pub const ALL: [ToolId; 3] = [
        ToolId::SearchFirePoints,
        ToolId::CountByYear,
        ToolId::SearchWildfires,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::SearchFirePoints => "search_fire_points",
            ToolId::CountByYear => "count_by_year",
            ToolId::SearchWildfires => "search_wildfires",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::UnknownTool, format!("Unknown toolId: {}", s))
                    .with_detail("toolId", s)
            })
    }
}
