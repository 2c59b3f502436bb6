//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    search_provider: String,
    summarizer_enabled: bool,
    trusted_domains: usize,
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let service = &state.verification_service;

    let response = HealthResponse {
        status: "healthy".to_string(),
        search_provider: service.search_provider().to_string(),
        summarizer_enabled: service.summarizer_enabled(),
        trusted_domains: service.classifier().trusted_domains().len(),
    };

    (StatusCode::OK, Json(response))
}

/// Simple liveness check (always returns OK if server is running)
async fn liveness() -> &'static str {
    "OK"
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
}
