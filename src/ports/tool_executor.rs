//! Tool Executor Port - Interface for running registered tools by name.
//!
//! This port abstracts the tool-dispatch façade: callers hand over a tool
//! identifier and a loosely typed argument bag, and get back a JSON result.
//! The same executor backs the `POST /run` endpoint and any tool-invocation
//! protocol transport plugged in front of it.
//!
//! # Design
//!
//! - The set of tools is static (see `ToolRegistry::builtin`)
//! - Arguments are extracted best-effort with per-tool defaults
//! - Backend failures keep their message and surface as internal failures
//! - Unknown identifiers surface as not-found
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//! use fireaid::ports::ToolExecutor;
//!
//! struct FireToolExecutor { /* ... */ }
//!
//! #[async_trait]
//! impl ToolExecutor for FireToolExecutor {
//!     async fn execute(
//!         &self,
//!         invocation: ToolInvocation,
//!     ) -> Result<serde_json::Value, ToolExecutionError> {
//!         // 1. Resolve the tool id
//!         // 2. Extract arguments with defaults
//!         // 3. Call the matching query handler
//!         // 4. Serialize the result
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::tools::{ToolDefinition, ToolInvocation};

/// Port for executing registered tools.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return its JSON result.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The tool ran; the value is its result
    /// * `Err(ToolExecutionError::ToolNotFound)` - Identifier not registered
    /// * `Err(ToolExecutionError::DomainError)` - The backend call failed
    async fn execute(
        &self,
        invocation: ToolInvocation,
    ) -> Result<serde_json::Value, ToolExecutionError>;

    /// The tool catalog. Never touches a backend.
    fn available_tools(&self) -> Vec<ToolDefinition>;

    /// Check if a tool exists.
    fn has_tool(&self, id: &str) -> bool;
}

/// Errors that can occur during tool execution.
#[derive(Debug, Clone, Error)]
pub enum ToolExecutionError {
    /// Tool not registered
    #[error("Unknown toolId: {0}")]
    ToolNotFound(String),

    /// Argument could not be interpreted (reserved; arguments are currently
    /// coerced or defaulted instead)
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Backend failure during execution
    #[error("{}", .0.message)]
    DomainError(#[from] DomainError),
}

impl ToolExecutionError {
    /// True when the caller asked for a tool that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ToolNotFound(_))
    }
}
