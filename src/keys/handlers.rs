//! HTTP handlers for API-key endpoints.
//!
//! Both routes are fixed-method: axum answers 405 for any other verb on a
//! matched path, which covers the method-not-allowed contract without
//! explicit handlers.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Deserialize)]
pub struct GenerateApiKeyRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// `POST generateApiKey` — issue and persist a key for a user.
pub async fn generate_api_key(
    State(state): State<AppState>,
    Json(request): Json<GenerateApiKeyRequest>,
) -> Response {
    let start = Instant::now();

    let response = match state.issuer.issue(&request.user_id) {
        Ok(api_key) => Json(json!({ "apiKey": api_key })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = %request.user_id, "API key persistence failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to persist API key", "error": e.to_string() })),
            )
                .into_response()
        }
    };

    metrics::record_request("generateApiKey", "POST", response.status().as_u16(), start);
    response
}

/// `GET getApiKey` — return a fresh unpersisted key.
///
/// The key is NOT recorded in the store and will not pass the gate;
/// callers that want a usable key must go through `generateApiKey`.
pub async fn get_api_key(State(state): State<AppState>) -> Response {
    let start = Instant::now();

    let response = Json(json!({ "apiKey": state.issuer.ephemeral() })).into_response();

    metrics::record_request("getApiKey", "GET", response.status().as_u16(), start);
    response
}
