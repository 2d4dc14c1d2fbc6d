//! HTTP error envelope and the mapping from domain failures to status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ToolExecutionError;

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds the envelope for a domain failure, carrying its details when
    /// there are any.
    pub fn from_domain(err: &DomainError) -> Self {
        let mut response = Self::new(err.code.to_string(), err.message.clone());
        if !err.details.is_empty() {
            let details: serde_json::Map<String, serde_json::Value> = err
                .details
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            response.details = Some(serde_json::Value::Object(details));
        }
        response
    }
}

/// API error type that converts domain and tool errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing request parameter
    BadRequest(String),
    Domain(DomainError),
    Tool(ToolExecutionError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::InvalidArgument.to_string(), message.clone()),
            ),
            ApiError::Domain(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::from_domain(err),
            ),
            ApiError::Tool(err @ ToolExecutionError::ToolNotFound(_)) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::UnknownTool.to_string(), err.to_string()),
            ),
            ApiError::Tool(ToolExecutionError::InvalidArgument(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(ErrorCode::InvalidArgument.to_string(), err.to_string()),
            ),
            ApiError::Tool(ToolExecutionError::DomainError(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::from_domain(err),
            ),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ToolExecutionError> for ApiError {
    fn from(err: ToolExecutionError) -> Self {
        Self::Tool(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(error_code = %body.error_code, message = %body.message, "Request failed");
        }
        (status, Json(body)).into_response()
    }
}
