//! Tool definition - catalog entry and argument schema for a tool.

use serde::{Deserialize, Serialize};

use super::ToolId;

/// Catalog entry describing a tool callers can run.
///
/// Serialized as-is for the tool listing endpoints:
///
/// ```ignore
/// {
///   "id": "search_wildfires",
///   "name": "Search Wildfires",
///   "kind": "system",
///   "tag": "NIFC/WFIGS",
///   "description": "...",
///   "rating": "Live data",
///   "parameters": { "type": "object", ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    id: ToolId,

    /// Human-readable display name
    name: String,

    kind: String,

    /// Data source label
    tag: String,

    description: String,

    /// Freshness of the data behind the tool
    rating: String,

    /// JSON Schema for the argument bag
    parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a system tool definition with no source metadata.
    pub fn new(
        id: ToolId,
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: "system".to_string(),
            tag: String::new(),
            description: description.into(),
            rating: String::new(),
            parameters,
        }
    }

    /// Sets the data source label and freshness rating.
    pub fn with_source(mut self, tag: impl Into<String>, rating: impl Into<String>) -> Self {
        self.tag = tag.into();
        self.rating = rating.into();
        self
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ToolDefinition {
        ToolDefinition::new(
            ToolId::CountByYear,
            "Count By Year",
            "Count fire points for a season",
            json!({"type": "object", "properties": {"year": {"type": "integer"}}}),
        )
        .with_source("AK Fire History", "Historical")
    }

    #[test]
    fn new_defaults_to_system_kind() {
        let def = sample();
        assert_eq!(def.id(), ToolId::CountByYear);
        assert_eq!(def.name(), "Count By Year");
        assert_eq!(def.tag(), "AK Fire History");
        assert_eq!(def.rating(), "Historical");
    }

    #[test]
    fn serializes_catalog_shape() {
        let out = serde_json::to_value(sample()).unwrap();
        assert_eq!(out["id"], "count_by_year");
        assert_eq!(out["kind"], "system");
        assert_eq!(out["description"], "Count fire points for a season");
        assert!(out["parameters"].is_object());
    }
}
