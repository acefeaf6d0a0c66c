//! HTTP entry point.
//!
//! Exposes the metadata route at `/api/openalex/fetchMetadata` plus health
//! checks.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::{Method, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ApiError;
use handlers::AppState;

/// Path of the metadata route.
pub const FETCH_METADATA_PATH: &str = "/api/openalex/fetchMetadata";

/// Create the HTTP router.
pub fn create_router(config: Config) -> Router {
    let state = AppState { config: Arc::new(config) };

    Router::new()
        .route("/", get(handlers::health_check))
        .route("/health", get(handlers::health_check))
        .route(
            FETCH_METADATA_PATH,
            post(handlers::fetch_metadata).fallback(handlers::method_not_allowed),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(reject_bare_options))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Only CORS preflights may reach the CORS layer as OPTIONS; any other
/// OPTIONS request is an unsupported method.
async fn reject_bare_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS && !is_cors_preflight(&request) {
        return ApiError::MethodNotAllowed.into_response();
    }
    next.run(request).await
}

fn is_cors_preflight(request: &Request) -> bool {
    let headers = request.headers();
    headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Serve the router until Ctrl+C.
///
/// # Errors
///
/// Returns error on bind or server failure.
pub async fn run_http(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!(
        api = %config.openalex_api_url,
        mailto = config.mailto.is_some(),
        "Starting HTTP server"
    );

    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
