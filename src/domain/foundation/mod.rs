//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types shared by the fire point,
//! incident, and tool modules.

mod errors;
mod loose_value;
mod result_limit;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use loose_value::LooseValue;
pub use result_limit::ResultLimit;
