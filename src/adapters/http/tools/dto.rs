//! Data transfer objects for tool HTTP endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::tools::{ToolDefinition, ToolInvocation};

/// Request body for `POST /run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunToolRequest {
    #[serde(rename = "toolId")]
    pub tool_id: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

impl From<RunToolRequest> for ToolInvocation {
    fn from(request: RunToolRequest) -> Self {
        ToolInvocation::new(request.tool_id, request.args)
    }
}

/// Successful response for `POST /run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunToolResponse {
    pub result: Value,
}

/// Response for the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResponse {
    pub tools: Vec<ToolDefinition>,
}
