//! Tool dispatch.

mod fire_tool_executor;

pub use fire_tool_executor::FireToolExecutor;
