//! Headline verification endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info, warn};
use verifier_core::VerifierError;

use crate::presentation::VerifyResponse;
use crate::AppState;

/// Body of a verification request
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub headline: String,
}

/// Create verification routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/verify", post(verify_headline))
        .route("/trusted-domains", get(list_trusted_domains))
}

/// POST /api/verify - Verify a headline against trusted outlets
async fn verify_headline(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected verify request body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": rejection.body_text()
                })),
            )
                .into_response();
        }
    };

    match state.verification_service.verify(&request.headline).await {
        Ok(report) => {
            info!(
                "Verified headline '{}': {} ({:.1}%)",
                report.query, report.verdict.label, report.verdict.confidence
            );
            (StatusCode::OK, Json(VerifyResponse::from(report))).into_response()
        }
        Err(VerifierError::InvalidInput(msg)) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": msg
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to verify headline: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to verify headline: {}", e)
                })),
            )
                .into_response()
        }
    }
}

/// GET /api/trusted-domains - List the trusted outlets
async fn list_trusted_domains(State(state): State<AppState>) -> impl IntoResponse {
    let domains = state.verification_service.classifier().trusted_domains();

    Json(serde_json::json!({
        "count": domains.len(),
        "domains": domains,
    }))
}
