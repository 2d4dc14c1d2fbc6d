//! Tool Registry - the static catalog of tools the façade can dispatch to.
//!
//! The catalog is built once on first use and never changes afterwards.
//!
//! # Example
//!
//! ```
//! use fireaid::domain::tools::{ToolId, ToolRegistry};
//!
//! let registry = ToolRegistry::builtin();
//! assert!(registry.has_tool("search_wildfires"));
//! assert_eq!(registry.get_tool("count_by_year").unwrap().id(), ToolId::CountByYear);
//! ```

use once_cell::sync::Lazy;
use serde_json::json;

use super::{ToolDefinition, ToolId};

static BUILTIN: Lazy<ToolRegistry> = Lazy::new(|| {
    ToolRegistry::new(vec![
        ToolDefinition::new(
            ToolId::SearchFirePoints,
            "Search Fire Points",
            "Search historical Alaska fire location points by fire season, prescribed-fire flag (Y/N) and managing organization.",
            json!({
                "type": "object",
                "properties": {
                    "year": { "type": "integer", "description": "Fire season" },
                    "prescribed": { "type": "string", "enum": ["Y", "N"] },
                    "org": { "type": "string", "description": "Managing organization id" },
                    "limit": { "type": "integer", "minimum": 1, "maximum": 100, "default": 20 }
                }
            }),
        )
        .with_source("AK Fire History", "Historical"),
        ToolDefinition::new(
            ToolId::CountByYear,
            "Count By Year",
            "Count historical fire location points recorded for a fire season.",
            json!({
                "type": "object",
                "properties": {
                    "year": { "type": "integer", "default": 2024 }
                }
            }),
        )
        .with_source("AK Fire History", "Historical"),
        ToolDefinition::new(
            ToolId::SearchWildfires,
            "Search Wildfires",
            "Search current wildland fire incidents (ArcGIS WFIGS). State format is typically 'US-CA'; two-letter codes are prefixed automatically.",
            json!({
                "type": "object",
                "properties": {
                    "keyword": { "type": "string", "description": "Substring of the incident name (case-sensitive)" },
                    "state": { "type": "string", "description": "Point-of-origin state, e.g. CA or US-CA" },
                    "limit": { "type": "integer", "minimum": 1, "maximum": 50, "default": 10 }
                }
            }),
        )
        .with_source("NIFC/WFIGS", "Live data"),
    ])
});

/// Catalog of registered tools, in listing order.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    fn new(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    /// The process-wide catalog.
    pub fn builtin() -> &'static ToolRegistry {
        &BUILTIN
    }

    /// All tool definitions.
    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Gets a tool definition by its string identifier.
    pub fn get_tool(&self, id: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.id().as_str() == id)
    }

    /// Checks if a tool is registered.
    pub fn has_tool(&self, id: &str) -> bool {
        self.get_tool(id).is_some()
    }

    /// Returns the number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_every_tool_id() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.tool_count(), ToolId::ALL.len());
        for id in ToolId::ALL {
            assert!(registry.has_tool(id.as_str()), "{} not registered", id);
        }
    }

    #[test]
    fn catalog_order_is_stable() {
        let ids: Vec<ToolId> = ToolRegistry::builtin()
            .definitions()
            .iter()
            .map(|t| t.id())
            .collect();
        assert_eq!(ids, ToolId::ALL.to_vec());
    }

    #[test]
    fn unknown_tool_is_absent() {
        assert!(ToolRegistry::builtin().get_tool("drop_collection").is_none());
    }

    #[test]
    fn wildfire_tool_carries_source_metadata() {
        let tool = ToolRegistry::builtin().get_tool("search_wildfires").unwrap();
        assert_eq!(tool.tag(), "NIFC/WFIGS");
        assert_eq!(tool.rating(), "Live data");
    }
}
