//! Error types for the DOI metadata service.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors from a single OpenAlex lookup.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Work not found (404 response)
    #[error("Work not found: {resource}")]
    NotFound {
        /// The work ID that was looked up
        resource: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed but does not look like a work object
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request URL could not be built
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status reported by the upstream, if the failure came from one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by the HTTP entry point.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Request used a method other than POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body has the wrong shape
    #[error("{0}")]
    InvalidInput(String),

    /// Anything that aborts the whole request
    #[error("Failed to fetch paper metadata: {0}")]
    Internal(String),
}

impl ApiError {
    /// Message used when `dois` is missing or not an array of strings.
    pub const INVALID_DOIS: &'static str = "Invalid input - dois must be an array";

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self::Internal(detail.to_string())
    }

    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
            }
            _ => (status, self.to_string()).into_response(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for request handling.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status() {
        assert_eq!(ClientError::not_found("https://doi.org/10.1/x").status(), Some(404));
        assert_eq!(ClientError::server(503, "unavailable").status(), Some(503));
        assert_eq!(ClientError::InvalidResponse("array".into()).status(), None);
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::invalid_input("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::internal("boom").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_message_prefix() {
        let err = ApiError::internal("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Failed to fetch paper metadata: expected value at line 1 column 1"
        );
    }
}
