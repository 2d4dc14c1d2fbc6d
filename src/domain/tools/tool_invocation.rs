//! Tool invocation - a tool identifier plus a loosely typed argument bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::LooseValue;

/// A single request to run a tool.
///
/// Built per request and discarded afterwards. Arguments are read
/// best-effort: a value that cannot be coerced is treated as missing so the
/// tool's default applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    #[serde(rename = "toolId")]
    tool_id: String,

    #[serde(default)]
    args: Map<String, Value>,
}

impl ToolInvocation {
    pub fn new(tool_id: impl Into<String>, args: Map<String, Value>) -> Self {
        Self {
            tool_id: tool_id.into(),
            args,
        }
    }

    pub fn tool_id(&self) -> &str {
        &self.tool_id
    }

    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }

    /// Integer argument. Accepts JSON numbers (truncated) and numeric strings.
    pub fn int_arg(&self, key: &str) -> Option<i64> {
        self.args
            .get(key)
            .and_then(LooseValue::from_json)
            .and_then(|v| v.as_i64())
    }

    /// Integer argument with a fallback.
    pub fn int_arg_or(&self, key: &str, default: i64) -> i64 {
        self.int_arg(key).unwrap_or(default)
    }

    /// String argument. Numbers are rendered as text.
    pub fn str_arg(&self, key: &str) -> Option<String> {
        self.args
            .get(key)
            .and_then(LooseValue::from_json)
            .map(|v| v.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invocation(args: Value) -> ToolInvocation {
        ToolInvocation::new("search_fire_points", args.as_object().cloned().unwrap())
    }

    #[test]
    fn deserializes_wire_shape() {
        let inv: ToolInvocation =
            serde_json::from_str(r#"{"toolId": "search_wildfires", "args": {"state": "CA"}}"#)
                .unwrap();
        assert_eq!(inv.tool_id(), "search_wildfires");
        assert_eq!(inv.str_arg("state").as_deref(), Some("CA"));
    }

    #[test]
    fn args_default_to_empty() {
        let inv: ToolInvocation = serde_json::from_str(r#"{"toolId": "count_by_year"}"#).unwrap();
        assert!(inv.args().is_empty());
    }

    #[test]
    fn int_arg_coerces_numbers_and_strings() {
        let inv = invocation(json!({"year": "2024", "limit": 7.9, "org": "AKS"}));
        assert_eq!(inv.int_arg("year"), Some(2024));
        assert_eq!(inv.int_arg("limit"), Some(7));
        assert_eq!(inv.int_arg("org"), None);
        assert_eq!(inv.int_arg("missing"), None);
    }

    #[test]
    fn int_arg_or_falls_back_on_garbage() {
        let inv = invocation(json!({"limit": [1, 2], "year": null}));
        assert_eq!(inv.int_arg_or("limit", 20), 20);
        assert_eq!(inv.int_arg_or("year", 2024), 2024);
    }

    #[test]
    fn str_arg_renders_numbers() {
        let inv = invocation(json!({"org": 12, "prescribed": "Y", "keyword": false}));
        assert_eq!(inv.str_arg("org").as_deref(), Some("12"));
        assert_eq!(inv.str_arg("prescribed").as_deref(), Some("Y"));
        assert_eq!(inv.str_arg("keyword"), None);
    }
}
