//! Request handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::client::OpenAlexClient;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{FetchRequest, PapersResponse};

/// Shared state for HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "doi-metadata",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Any method other than POST on the metadata route. The body is never read.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Handle POST requests carrying `{"dois": [...]}`.
pub async fn fetch_metadata(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(ApiError::internal)?;
    let request = parse_request(value)?;

    tracing::info!(dois = request.dois.len(), "Handling metadata request");

    // Scoped to this request; dropped on every exit path.
    let client = OpenAlexClient::new(&state.config).map_err(ApiError::internal)?;
    let papers = client.fetch_batch(&request.dois).await;

    let body = serde_json::to_vec(&PapersResponse { papers }).map_err(ApiError::internal)?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Validate the decoded body shape.
fn parse_request(value: serde_json::Value) -> ApiResult<FetchRequest> {
    if !value.is_object() {
        return Err(ApiError::invalid_input(ApiError::INVALID_DOIS));
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting malformed request body");
        ApiError::invalid_input(ApiError::INVALID_DOIS)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request_accepts_string_list() {
        let request = parse_request(json!({"dois": ["10.1/a", "10.1/b"]})).unwrap();
        assert_eq!(request.dois, vec!["10.1/a", "10.1/b"]);
    }

    #[test]
    fn test_parse_request_rejects_non_object() {
        let err = parse_request(json!([["10.1/a"]])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_request_rejects_missing_dois() {
        let err = parse_request(json!({"queries": ["10.1/a"]})).unwrap_err();
        assert_eq!(err.to_string(), ApiError::INVALID_DOIS);
    }
}
