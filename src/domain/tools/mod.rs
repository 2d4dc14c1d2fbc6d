//! Tools module - catalog and invocation types for the tool-dispatch façade.
//!
//! - `ToolId` - the closed set of registered tools
//! - `ToolDefinition` - catalog entry (display name, description, argument schema)
//! - `ToolRegistry` - static catalog
//! - `ToolInvocation` - identifier plus loosely typed argument bag

mod tool_definition;
mod tool_id;
mod tool_invocation;
mod tool_registry;

pub use tool_definition::ToolDefinition;
pub use tool_id::ToolId;
pub use tool_invocation::ToolInvocation;
pub use tool_registry::ToolRegistry;
