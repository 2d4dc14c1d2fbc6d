//! FireToolExecutor - dispatches tool invocations to the fire query handlers.
//!
//! Each tool maps onto exactly one query handler. Arguments are pulled from
//! the invocation best-effort; anything missing or uncoercible takes the
//! tool's default.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::application::handlers::fire_points::{CountByYearHandler, CountByYearQuery, SearchFirePointsHandler};
use crate::application::handlers::incidents::SearchWildfiresHandler;
use crate::domain::fire_point::FirePointQuery;
use crate::domain::foundation::DomainError;
use crate::domain::incident::IncidentQuery;
use crate::domain::tools::{ToolDefinition, ToolId, ToolInvocation, ToolRegistry};
use crate::ports::{FirePointReader, IncidentFeed, ToolExecutionError, ToolExecutor};

/// Tool executor over the fire point store and the incident feed.
pub struct FireToolExecutor {
    search_points: SearchFirePointsHandler,
    count_by_year: CountByYearHandler,
    search_wildfires: SearchWildfiresHandler,
}

impl FireToolExecutor {
    pub fn new(fire_points: Arc<dyn FirePointReader>, incidents: Arc<dyn IncidentFeed>) -> Self {
        Self {
            search_points: SearchFirePointsHandler::new(fire_points.clone()),
            count_by_year: CountByYearHandler::new(fire_points),
            search_wildfires: SearchWildfiresHandler::new(incidents),
        }
    }

    fn fire_point_query(invocation: &ToolInvocation) -> FirePointQuery {
        FirePointQuery::new(invocation.int_arg_or("limit", FirePointQuery::DEFAULT_LIMIT))
            .with_year(invocation.int_arg("year"))
            .with_prescribed(invocation.str_arg("prescribed").as_deref())
            .with_org(invocation.str_arg("org"))
    }

    fn count_query(invocation: &ToolInvocation) -> CountByYearQuery {
        CountByYearQuery::new(invocation.int_arg_or("year", CountByYearQuery::DEFAULT_YEAR))
    }

    async fn dispatch(
        &self,
        tool: ToolId,
        invocation: &ToolInvocation,
    ) -> Result<Value, ToolExecutionError> {
        match tool {
            ToolId::SearchFirePoints => {
                let points = self
                    .search_points
                    .handle(Self::fire_point_query(invocation))
                    .await?;
                to_json(&points)
            }
            ToolId::CountByYear => {
                let count = self.count_by_year.handle(Self::count_query(invocation)).await?;
                to_json(&count)
            }
            ToolId::SearchWildfires => {
                let incidents = self
                    .search_wildfires
                    .handle(Self::incident_query(invocation))
                    .await?;
                to_json(&incidents)
            }
        }
    }

    fn incident_query(invocation: &ToolInvocation) -> IncidentQuery {
        IncidentQuery::new(invocation.int_arg_or("limit", IncidentQuery::DEFAULT_LIMIT))
            .with_keyword(invocation.str_arg("keyword"))
            .with_state(invocation.str_arg("state").as_deref())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ToolExecutionError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::internal(format!("Failed to serialize tool result: {}", e)).into()
    })
}

#[async_trait]
impl ToolExecutor for FireToolExecutor {
    async fn execute(&self, invocation: ToolInvocation) -> Result<Value, ToolExecutionError> {
        let tool: ToolId = invocation.tool_id().parse().map_err(|_| {
            tracing::info!(tool_id = invocation.tool_id(), "Unknown tool requested");
            ToolExecutionError::ToolNotFound(invocation.tool_id().to_string())
        })?;

        tracing::debug!(tool = %tool, args = ?invocation.args(), "Executing tool");

        let result = self.dispatch(tool, &invocation).await;
        if let Err(err) = &result {
            tracing::warn!(tool = %tool, error = %err, "Tool execution failed");
        }
        result
    }

    fn available_tools(&self) -> Vec<ToolDefinition> {
        ToolRegistry::builtin().definitions().to_vec()
    }

    fn has_tool(&self, id: &str) -> bool {
        ToolRegistry::builtin().has_tool(id)
    }
}
